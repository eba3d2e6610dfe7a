use anyhow::{bail, Result};
use clap::Parser;
use otpfield::otp::OTP_LENGTH;

/// Demo screen for the six-digit OTP entry field.
#[derive(Parser)]
#[command(version, about = "Six-digit OTP entry field demo")]
struct Args {
    /// Code the demo accepts as correct.
    #[arg(long, default_value = "123456")]
    code: String,

    /// Blank cells between adjacent digit boxes.
    #[arg(long, default_value_t = 1)]
    spacing: u16,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.code.chars().count() != OTP_LENGTH || !args.code.chars().all(|c| c.is_ascii_digit()) {
        bail!("--code must be exactly {OTP_LENGTH} decimal digits");
    }

    otpfield::logging::init_tracing();
    otpfield::ui::runtime::run(args.code, args.spacing)
}
