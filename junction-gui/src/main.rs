#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process};

#[cfg(target_os = "linux")]
use iced::window::settings::PlatformSpecific;
use iced::{Settings, Size};
use tracing::error;

use junction_ui::{component::text, theme};

use junction_gui::{
    dir::JunctionDirectory,
    gui::{Config, GUI},
    logger::parse_log_level,
    services::auth::DEFAULT_BASE_URL,
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(JunctionDirectory),
    ApiUrl(String),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: junction-gui [OPTIONS]

Options:
    --datadir <PATH>    Path of the junction-gui datadir
    --api-url <URL>     Base URL of the authentication service
    -v, --version       Display junction-gui version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--datadir" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::DatadirPath(JunctionDirectory::new(PathBuf::from(a))));
                i += 1;
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else if arg == "--api-url" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::ApiUrl(a.clone()));
                i += 1;
            } else {
                return Err("missing arg to --api-url".into());
            }
        } else if arg.starts_with("--") {
            return Err(format!("unknown arg: {}", arg).into());
        }
        i += 1;
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;

    let mut datadir = None;
    let mut api_url = None;
    for arg in args {
        match arg {
            Arg::DatadirPath(d) => datadir = Some(d),
            Arg::ApiUrl(u) => api_url = Some(u),
        }
    }
    let datadir = match datadir {
        Some(datadir) => datadir,
        None => JunctionDirectory::new_default()?,
    };
    if !datadir.exists() {
        datadir.init()?;
    }
    let config = Config::new(
        datadir,
        api_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
    );

    let log_level = parse_log_level()?;

    setup_panic_hook();

    let settings = Settings {
        id: Some("JobJunction".to_string()),
        antialiasing: false,

        default_text_size: text::P1_SIZE.into(),
        default_font: junction_ui::font::REGULAR,
        fonts: Vec::new(),
    };

    #[allow(unused_mut)]
    let mut window_settings = iced::window::Settings {
        position: iced::window::Position::Default,
        min_size: Some(Size {
            width: 800.0,
            height: 600.0,
        }),
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = PlatformSpecific {
            application_id: "JobJunction".to_string(),
            ..Default::default()
        };
    }

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .scale_factor(GUI::scale_factor)
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new((config, log_level)))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["junction-gui".into(), "--meth".into()]).is_err());
        assert!(parse_args(vec!["junction-gui".into(), "--datadir".into()]).is_err());
        assert!(parse_args(vec!["junction-gui".into(), "--api-url".into()]).is_err());
        assert_eq!(
            Some(vec![Arg::DatadirPath(JunctionDirectory::new(
                PathBuf::from("hello")
            ))]),
            parse_args(
                "junction-gui --datadir hello"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
        assert_eq!(
            Some(vec![
                Arg::ApiUrl("http://localhost:4000".to_string()),
                Arg::DatadirPath(JunctionDirectory::new(PathBuf::from("hello"))),
            ]),
            parse_args(
                "junction-gui --api-url http://localhost:4000 --datadir hello"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
    }
}
