use super::{Resolution, Screen};

/// Primary display of the running session
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemScreen;

#[cfg(any(windows, target_os = "macos"))]
impl Screen for SystemScreen {
    fn resolution(&self) -> Option<Resolution> {
        match screen_size::get_primary_screen_size() {
            Ok((width, height)) => Some(Resolution::new(
                u32::try_from(width).ok()?,
                u32::try_from(height).ok()?,
            )),
            Err(_) => {
                tracing::debug!("primary screen size unavailable");
                None
            }
        }
    }
}

#[cfg(not(any(windows, target_os = "macos")))]
impl Screen for SystemScreen {
    fn resolution(&self) -> Option<Resolution> {
        let output = std::process::Command::new("xrandr")
            .arg("--current")
            .output()
            .map_err(|e| tracing::debug!("failed to run xrandr: {e}"))
            .ok()?;

        if !output.status.success() {
            tracing::debug!(
                "xrandr failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return None;
        }

        parse_xrandr(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Pick the primary output's size out of `xrandr --current` output.
///
/// Falls back to the first connected output, then to the overall
/// `current W x H` of the screen.
pub fn parse_xrandr(output: &str) -> Option<Resolution> {
    let connected: Vec<&str> = output
        .lines()
        .filter(|line| line.contains(" connected"))
        .collect();

    let from_outputs = connected
        .iter()
        .find(|line| line.contains(" connected primary "))
        .into_iter()
        .chain(connected.iter())
        .find_map(|line| line.split_whitespace().find_map(parse_geometry));

    from_outputs.or_else(|| {
        let current = output.lines().find_map(|line| {
            let (_, rest) = line.split_once("current ")?;
            rest.split(',').next()
        })?;
        let (w, h) = current.split_once(" x ")?;
        Some(Resolution::new(w.trim().parse().ok()?, h.trim().parse().ok()?))
    })
}

/// `1920x1080+0+0` -> 1920x1080
fn parse_geometry(token: &str) -> Option<Resolution> {
    let (size, _offset) = token.split_once('+')?;
    let (w, h) = size.split_once('x')?;
    Some(Resolution::new(w.parse().ok()?, h.parse().ok()?))
}
