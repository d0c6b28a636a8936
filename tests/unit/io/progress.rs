//! Tests for batch progress display

#[cfg(test)]
mod tests {
    use randsep::io::progress::ProgressManager;

    // Tests single runs get no progress bar
    // Verified by creating a bar for every batch
    #[test]
    fn test_single_run_hidden() {
        assert!(!ProgressManager::new(1).is_visible());
        assert!(!ProgressManager::hidden().is_visible());
    }

    // Tests larger batches get a bar that can be advanced and cleared
    #[test]
    fn test_batch_visible() {
        let progress = ProgressManager::new(3);

        assert!(progress.is_visible());
        for _ in 0..3 {
            progress.complete_run();
        }
        progress.finish();
    }
}
