pub const DOWNLOAD_FAILED_MESSAGE: &str = "Could not download file. Ensure path is correct.";
const FALLBACK_FILE_NAME: &str = "firmware.ino";

/// The companion firmware sketch served next to the site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirmwareSource {
    path: String,
}

impl FirmwareSource {
    pub fn new(path: &str) -> Self {
        Self {
            path: path.trim().to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Suggested name for the saved file.
    pub fn file_name(&self) -> &str {
        self.path
            .split(['?', '#'])
            .next()
            .and_then(|path| path.rsplit('/').next())
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_FILE_NAME)
    }

    pub fn load_failed_text(&self) -> String {
        format!(
            "// Unable to load Arduino source. Ensure the file exists at: {}",
            self.path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_SOURCE_PATH;

    #[test]
    fn default_sketch_name() {
        let source = FirmwareSource::new(DEFAULT_SOURCE_PATH);
        assert_eq!(source.file_name(), "RC-Car-WiFi-wAxis.ino");
        assert_eq!(
            source.load_failed_text(),
            "// Unable to load Arduino source. Ensure the file exists at: ../RC-Car-WiFi-wAxis/RC-Car-WiFi-wAxis.ino"
        );
    }

    #[test]
    fn file_name_ignores_query_and_trailing_slash() {
        assert_eq!(FirmwareSource::new("fw/car.ino?v=2").file_name(), "car.ino");
        assert_eq!(FirmwareSource::new("fw/").file_name(), FALLBACK_FILE_NAME);
    }
}
