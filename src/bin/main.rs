//! joystick-monitor - print interpreted joystick readings from a serial port.

use std::process::ExitCode;

use clap::{ArgAction, Parser};
use log::{error, info, warn};
use serial_joystick::{
    zero_on_first_frame, CalibrationState, JoystickConfig, ReadError, SerialConfig,
    TransportError, DEFAULT_BAUD_RATE, DEFAULT_PORT,
};

#[derive(Parser)]
#[command(name = "joystick-monitor")]
#[command(about = "Read and interpret joystick telemetry from a serial port")]
#[command(version)]
struct Cli {
    /// Serial device the joystick is attached to
    #[arg(short, long, env = "JOYSTICK_PORT", default_value = DEFAULT_PORT)]
    port: String,

    /// Line rate of the serial link
    #[arg(short, long, default_value_t = DEFAULT_BAUD_RATE)]
    baud: u32,

    /// Raw X reading at rest
    #[arg(long, allow_negative_numbers = true)]
    x_zero: Option<i32>,

    /// Raw Y reading at rest
    #[arg(long, allow_negative_numbers = true)]
    y_zero: Option<i32>,

    /// Zero both axes on the first valid frame
    #[arg(long)]
    auto_zero: bool,

    /// Stop after this many readings
    #[arg(short = 'n', long)]
    count: Option<u64>,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> JoystickConfig {
        let mut calibration = CalibrationState::default();
        calibration.update(self.x_zero, self.y_zero);
        JoystickConfig {
            serial: SerialConfig::new(self.port.as_str()).with_baud_rate(self.baud),
            calibration,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: &Cli) -> serial_joystick::Result<()> {
    let mut joystick = cli.config().open()?;
    info!(
        "reading {} at {} baud (x_zero={}, y_zero={})",
        cli.port,
        cli.baud,
        joystick.calibration().x_zero,
        joystick.calibration().y_zero
    );

    if cli.auto_zero && zero_on_first_frame(&mut joystick)?.is_none() {
        return Ok(());
    }

    let mut shown = 0u64;
    while cli.count.is_none_or(|limit| shown < limit) {
        match joystick.read_state() {
            Ok(state) => {
                println!("{state}");
                shown += 1;
            }
            Err(ReadError::Transport(TransportError::Disconnected)) => {
                info!("device disconnected after {shown} readings");
                break;
            }
            Err(e @ ReadError::Transport(TransportError::Io)) => return Err(e.into()),
            Err(e) => warn!("skipping line: {e}"),
        }
    }

    Ok(())
}
