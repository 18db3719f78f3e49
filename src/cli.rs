use clap::Parser;
use hex_color::HexColor;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Update rate of the timer in hertz. 0 updates every frame.
    #[arg(short = 'H', long, default_value_t = 60)]
    pub hz: u32,

    /// Color of the elapsed part of the progress bar.
    #[arg(long, default_value = "#FFFFFF", value_parser = HexColor::parse)]
    pub foreground: HexColor,

    /// Color of the remaining part of the progress bar.
    #[arg(long, default_value = "#000000", value_parser = HexColor::parse)]
    pub background: HexColor,

    /// Start the timer paused.
    #[arg(long)]
    pub paused: bool,

    /// Duration of the timer in seconds.
    #[arg(default_value_t = 10.0)]
    pub duration: f32,
}
