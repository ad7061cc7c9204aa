use indicatif::{ProgressBar, ProgressStyle};

/// Creates a progress bar for `len` steps, or `None` when progress output is disabled.
pub fn progress_bar(len: u64, msg: String, enabled: bool) -> Option<ProgressBar> {
    if !enabled {
        return None;
    }

    let bar = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise} / {eta_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
    {
        bar.set_style(style.progress_chars("##-"));
    }
    bar.set_message(msg);

    Some(bar)
}

#[cfg(test)]
mod tests {
    use crate::utils::progress_utils::progress_bar;

    #[test]
    fn test_disabled_progress_bar() {
        assert!(progress_bar(10, "Simulating season".to_string(), false).is_none());
    }

    #[test]
    fn test_enabled_progress_bar_length() {
        let bar = progress_bar(25, "Simulating season".to_string(), true).unwrap();

        assert_eq!(bar.length(), Some(25));
        bar.finish_and_clear();
    }
}
