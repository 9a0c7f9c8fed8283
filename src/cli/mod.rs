// CLI module
// Public interface for the command-line front end

mod commands;
mod navigator;

pub use commands::{
    browse, format_developers, format_frame, parse_coordinate, profile, search, BrowseArgs,
    SearchArgs,
};
pub use navigator::PrintNavigator;
