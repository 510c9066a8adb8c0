mod cli;
mod commands;
mod render;

use talentfit::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
