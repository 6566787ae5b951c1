use std::path::Path;
use std::process::Command;

/// Open a rendered plot image with the platform default viewer.
pub fn show_image(image_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(image_path);
    if !path.is_file() {
        return Err(format!("Image '{}' not found", image_path).into());
    }
    open_with_default_viewer(path)
}

fn open_with_default_viewer(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_os = "windows")]
    {
        Command::new("cmd")
            .args(["/C", "start", "", path.to_str().unwrap()])
            .spawn()?;
    }

    #[cfg(target_os = "macos")]
    {
        Command::new("open").arg(path).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        Command::new("xdg-open").arg(path).spawn()?;
    }

    Ok(())
}
