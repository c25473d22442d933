// src/config/persist.rs
//
// key=value config file, one setting per line, # comments allowed.
// Unknown keys are ignored so old files keep loading.

use std::{fs, path::Path};

use super::options::{AppOptions, RefreshInterval};

pub fn load(path: &str) -> AppOptions {
    if !Path::new(path).exists() {
        return AppOptions::default();
    }
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(_) => return AppOptions::default(),
    };
    let mut options = AppOptions::default();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(eq) = line.find('=') {
            let key = line[..eq].trim();
            let val = line[eq + 1..].trim();
            match key {
                "url" => options.feed.url = val.to_string(),
                "refresh" => {
                    if let Some(iv) = RefreshInterval::from_key(val) {
                        options.feed.interval = iv;
                    }
                }
                _ => {}
            }
        }
    }
    options
}

pub fn save(path: &str, options: &AppOptions) {
    let mut s = String::new();
    s.push_str(&format!("url={}\n", options.feed.url));
    s.push_str(&format!("refresh={}\n", options.feed.interval.key()));
    let _ = fs::write(path, s);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let options = load("does_not_exist.conf");
        assert_eq!(options, AppOptions::default());
    }
}
