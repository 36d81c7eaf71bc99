use super::App;
use crate::kernel::services::adapters::load_settings_from;
use std::time::Instant;

impl App {
    /// 每帧调用：推进动画并检查设置文件；返回是否需要重绘
    pub fn tick(&mut self) -> bool {
        let mut changed = std::mem::take(&mut self.needs_redraw);
        changed |= self.strip.tick();
        changed |= self.left_button.tick();
        changed |= self.right_button.tick();
        changed |= self.poll_settings();
        changed
    }

    fn poll_settings(&mut self) -> bool {
        let Some(path) = self.settings_path.as_ref() else {
            return false;
        };

        if self.last_settings_check.elapsed() < super::SETTINGS_CHECK_INTERVAL {
            return false;
        }
        self.last_settings_check = Instant::now();

        let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok();
        if modified.is_none() || modified == self.last_settings_modified {
            return false;
        }
        self.last_settings_modified = modified;
        self.reload_settings()
    }

    pub fn reload_settings(&mut self) -> bool {
        let Some(path) = self.settings_path.clone() else {
            return false;
        };
        let Some(settings) = load_settings_from(&path) else {
            return false;
        };
        self.apply_settings(&settings);
        tracing::info!(path = %path.display(), "settings reloaded");
        true
    }
}
