//! Resolve the colored icon of a folder
//!
//! Prints the icon file and URI a file manager would store for `<folder>`
//! when the user picks `<color>` under the icon theme `<theme>`.
//!
//! Run with:
//! `LOG_FOLDER_COLOR_SWITCHER=10 cargo run -p folder-color --example resolve_folder -- Mint-Y Blue ~/Music 48`

use std::path::PathBuf;
use std::process::ExitCode;

use folder_color::{Color, FolderColorSwitcher, IconAssignment};

fn main() -> ExitCode {
    if let Err(e) = folder_color::init_logging() {
        eprintln!("{}", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [theme, color, folder, rest @ ..] = args.as_slice() else {
        eprintln!("usage: resolve_folder <theme> <color> <folder> [size]");
        return ExitCode::FAILURE;
    };

    let color: Color = match color.parse() {
        Ok(color) => color,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    let size = match rest.first().map(|s| s.parse::<u32>()) {
        None => 48,
        Some(Ok(size)) if size > 0 => size,
        Some(_) => {
            eprintln!("size must be a positive number of pixels");
            return ExitCode::FAILURE;
        }
    };

    let switcher = match FolderColorSwitcher::new(theme) {
        Ok(switcher) => switcher,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let folder = PathBuf::from(folder);
    println!("folder kind: {:?}", switcher.classify(&folder));
    println!(
        "colors offered: {}",
        switcher
            .supported_colors(&[&folder], size, 1)
            .iter()
            .map(Color::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    for (_, assignment) in switcher.plan_assignments(Some(color), &[&folder], size, 1) {
        match assignment {
            IconAssignment::Set { path, uri } => {
                println!("icon: {}", path.display());
                println!("uri:  {}", uri);
            }
            IconAssignment::Unset | IconAssignment::Missing => {
                println!("no {} icon in theme {}", color, switcher.current_theme().key());
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
