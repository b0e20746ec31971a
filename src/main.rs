use appiconset::{config, iconset, imaging::RustBackend, output};
use clap::Parser;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "appiconset")]
#[command(about = "Generate a macOS AppIcon.appiconset from a single PNG")]
#[command(long_about = "\
Generate a macOS AppIcon.appiconset from a single PNG

Reads the source logo, writes the ten icon sizes Xcode expects for a mac
app and a matching Contents.json:

  ConfigForge/Assets.xcassets/
  ├── Logo.imageset/
  │   └── logo.png                 # Source (ideally 1024x1024 or larger)
  └── AppIcon.appiconset/
      ├── icon_16x16_1x.png        # 16x16
      ├── icon_16x16_2x.png        # 32x32
      ├── ...
      ├── icon_512x512_2x.png      # 1024x1024
      └── Contents.json

Paths are relative to the working directory. An optional appiconset.toml
in the working directory can point at a different source or output.")]
#[command(version = version_string())]
struct Cli {}

fn main() {
    Cli::parse();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = config::load_config(&cwd)?.resolved_in(&cwd);

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            output::print_icon_event(&event);
        }
    });
    let result = iconset::generate(&config, Some(tx));
    // The sender is dropped on every path out of `generate`, so the printer
    // always finishes; join before reporting so progress lines come first.
    printer.join().ok();
    let result = result?;
    output::print_generate_output(&result);

    let report = iconset::verify(&RustBackend::new(), &config.output_dir)?;
    output::print_verify_output(&report);
    if !report.is_ok() {
        return Err("generated icon set does not match Contents.json".into());
    }

    Ok(())
}
