use std::path::Path;

use anyhow::Context;

use super::ReservationApp;
use crate::services::script::script_file_name;

/// Save-file collaborator: native dialog plus the actual write.
impl ReservationApp {
    pub(super) fn save_generated_script(&mut self) {
        let Some(script) = self.generated_script.clone() else {
            return;
        };
        let file_name = script_file_name(self.target_month);

        if let Some(path) = rfd::FileDialog::new()
            .set_title("배치 파일 저장")
            .set_file_name(file_name.as_str())
            .add_filter("Batch files", &["bat"])
            .save_file()
        {
            match write_script(&path, &script) {
                Ok(()) => {
                    log::info!("Saved scheduler script to {:?}", path);
                    self.notice.success(format!("{} 저장 완료", file_name));
                }
                Err(e) => {
                    log::error!("Failed to save scheduler script: {:#}", e);
                    self.notice.error("배치 파일 저장에 실패했습니다.");
                }
            }
        }
    }
}

fn write_script(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content).with_context(|| format!("writing script to {}", path.display()))
}
