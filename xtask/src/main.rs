//! Build automation tasks for Castle Runner
//!
//! Usage:
//!   cargo xtask build-web       # Build WASM for web deployment
//!   cargo xtask serve           # Serve dist/web on http://localhost:8080
//!   cargo xtask package-itch    # Create zip for itch.io upload
//!   cargo xtask package-native  # Release binary plus assets in dist/native

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Component, Path, PathBuf};
use std::process::Command;

const CRATE_NAME: &str = "castle-runner";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for Castle Runner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build WASM for web deployment
    BuildWeb {
        /// Mark as dev build (adds DEV to the page title)
        #[arg(long)]
        dev: bool,
    },
    /// Serve dist/web locally for testing the web build
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
        /// Rebuild before serving
        #[arg(long)]
        build: bool,
    },
    /// Create zip file ready for itch.io upload
    PackageItch,
    /// Build a native release with its assets next to it
    PackageNative {
        /// Target platform: windows, macos, linux
        #[arg(long)]
        platform: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildWeb { dev } => build_web(dev),
        Commands::Serve { port, build } => {
            if build {
                build_web(true)?;
            }
            serve(port)
        }
        Commands::PackageItch => package_itch(),
        Commands::PackageNative { platform } => package_native(platform),
    }
}

/// Get the project root directory
fn project_root() -> Result<PathBuf> {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live inside the workspace")
}

/// Run a command and check for success
fn run_cmd(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("Failed to execute command")?;
    if !status.success() {
        anyhow::bail!("Command failed with status: {}", status);
    }
    Ok(())
}

/// Download a file from URL to destination
fn download_file(url: &str, dest: &Path) -> Result<()> {
    println!("Downloading {}...", url);
    run_cmd(
        Command::new("curl")
            .args(["-L", "-o"])
            .arg(dest)
            .arg(url),
    )
}

/// Copy directory recursively
fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src).with_context(|| format!("reading {}", src.display()))? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Build WASM for web deployment
fn build_web(dev: bool) -> Result<()> {
    let root = project_root()?;
    let dist = root.join("dist/web");

    println!("Building WASM...");
    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "--target", "wasm32-unknown-unknown", "-p", CRATE_NAME]),
    )?;

    // Clean and create dist folder
    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    println!("Copying files to dist/web...");
    let wasm = format!("{}.wasm", CRATE_NAME);
    std::fs::copy(
        root.join("target/wasm32-unknown-unknown/release").join(&wasm),
        dist.join(&wasm),
    )?;

    // Page shell from web/
    let web = root.join("web");
    for file in ["index.html", "favicon.png"] {
        let src = web.join(file);
        if src.exists() {
            std::fs::copy(&src, dist.join(file))?;
        }
    }

    // Download macroquad JS bundle
    let mq_js = dist.join("mq_js_bundle.js");
    if !mq_js.exists() {
        download_file(
            "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js",
            &mq_js,
        )?;
    }

    copy_dir_recursive(&root.join("assets"), &dist.join("assets"))?;

    if dev {
        println!("Applying DEV build modifications...");
        let index_path = dist.join("index.html");
        let index = std::fs::read_to_string(&index_path)?;
        let index = index.replace("<title>Castle Runner", "<title>[DEV] Castle Runner");
        std::fs::write(&index_path, index)?;
    }

    println!("Web build complete: dist/web/");
    Ok(())
}

/// Content type for a served file
fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("ogg") => "audio/ogg",
        Some("wav") => "audio/wav",
        Some("ttf") => "font/ttf",
        Some("ron") | Some("txt") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Map a request URL to a file under `root`, refusing anything that would
/// escape it
fn resolve_request(root: &Path, url: &str) -> Option<PathBuf> {
    let path = url.split(['?', '#']).next().unwrap_or("");
    let path = path.trim_start_matches('/');
    let path = if path.is_empty() { "index.html" } else { path };

    let relative = Path::new(path);
    if relative.components().any(|c| !matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(root.join(relative))
}

/// Static file server for dist/web
fn serve(port: u16) -> Result<()> {
    let root = project_root()?.join("dist/web");
    if !root.join("index.html").exists() {
        anyhow::bail!("dist/web is empty, run `cargo xtask build-web` first");
    }

    let addr = format!("127.0.0.1:{}", port);
    let server = tiny_http::Server::http(&addr).map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", addr, e))?;
    println!("Serving dist/web on http://{}/ (Ctrl+C to stop)", addr);

    for request in server.incoming_requests() {
        let file = resolve_request(&root, request.url()).filter(|p| p.is_file());

        let result = match file {
            Some(path) => {
                let header = tiny_http::Header::from_bytes(&b"Content-Type"[..], content_type(&path).as_bytes())
                    .map_err(|_| anyhow::anyhow!("bad header"))?;
                match std::fs::File::open(&path) {
                    Ok(f) => request.respond(tiny_http::Response::from_file(f).with_header(header)),
                    Err(_) => request.respond(tiny_http::Response::from_string("Not found").with_status_code(404)),
                }
            }
            None => {
                println!("404 {}", request.url());
                request.respond(tiny_http::Response::from_string("Not found").with_status_code(404))
            }
        };

        if let Err(e) = result {
            eprintln!("Failed to respond: {}", e);
        }
    }

    Ok(())
}

/// Create zip for itch.io
fn package_itch() -> Result<()> {
    // First build web
    build_web(false)?;

    let root = project_root()?;
    let dist = root.join("dist");
    let zip_name = format!("{}-itch.zip", CRATE_NAME);
    let zip_path = dist.join(&zip_name);

    // Remove old zip if exists
    if zip_path.exists() {
        std::fs::remove_file(&zip_path)?;
    }

    println!("Creating itch.io zip...");
    run_cmd(
        Command::new("zip")
            .current_dir(dist.join("web"))
            .args(["-r", &format!("../{}", zip_name), "."]),
    )?;

    println!("itch.io package ready: dist/{}", zip_name);
    Ok(())
}

/// Native release build with assets alongside
fn package_native(platform: Option<String>) -> Result<()> {
    let root = project_root()?;
    let platform = platform.unwrap_or_else(|| {
        if cfg!(target_os = "windows") {
            "windows".to_string()
        } else if cfg!(target_os = "macos") {
            "macos".to_string()
        } else {
            "linux".to_string()
        }
    });

    let dist = root.join(format!("dist/native/{}", platform));

    println!("Building native release for {}...", platform);

    // Clean and create dist folder
    if dist.exists() {
        std::fs::remove_dir_all(&dist)?;
    }
    std::fs::create_dir_all(&dist)?;

    run_cmd(
        Command::new("cargo")
            .current_dir(&root)
            .args(["build", "--release", "-p", CRATE_NAME]),
    )?;

    let binary_name = if platform == "windows" {
        format!("{}.exe", CRATE_NAME)
    } else {
        CRATE_NAME.to_string()
    };

    std::fs::copy(
        root.join("target/release").join(&binary_name),
        dist.join(&binary_name),
    )?;

    copy_dir_recursive(&root.join("assets"), &dist.join("assets"))?;

    println!("Native build complete: dist/native/{}/", platform);
    Ok(())
}
