//! One configured board and its refresh cycle.

use std::path::PathBuf;

use chrono::{DateTime, TimeZone};
use log::{error, info, warn};
use todo_display_core::{
    BoardContent, CanvasGeometry, FontBook, LayoutConfig, ListMode, ListSummary, Rendered, Task,
    TaskGroups, render,
};

use crate::config::{BoardConfig, ConfigError};
use crate::error::Result;
use crate::preview::save_png;
use crate::sink::DisplaySink;
use crate::source::{TaskSource, collect_tasks};

/// Format of the "Updated:" line, e.g. `Oct 18, 2026 09:30 AM`.
pub const TIMESTAMP_FORMAT: &str = "%b %d, %Y %I:%M %p";

pub fn format_timestamp<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// What one refresh did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Rendered and total counts, one entry per list.
    pub lists: Vec<ListSummary>,
    /// Tasks left after conversion, zero when the fetch failed.
    pub fetched: usize,
    /// Where the preview went, if one was written.
    pub preview: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    geometry: CanvasGeometry,
    layout: LayoutConfig,
    fonts: FontBook,
}

impl Board {
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let geometry = config.geometry()?;
        let layout = config.layout();
        let fonts = config.font_book();
        Ok(Board {
            config,
            geometry,
            layout,
            fonts,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn geometry(&self) -> &CanvasGeometry {
        &self.geometry
    }

    /// Lays out and paints `tasks`; in dual mode each owner list gets its matching tasks.
    pub fn render(&self, tasks: &[Task], timestamp: &str) -> Result<Rendered> {
        let rendered = match (self.config.display.mode, self.config.owner_labels()) {
            (ListMode::Dual, Some((first, second))) => {
                let groups = TaskGroups::from_tasks(tasks.iter().cloned());
                let shown = groups.owner(first).len() + groups.owner(second).len();
                if shown < tasks.len() {
                    warn!(
                        "{} tasks belong to neither {first} nor {second}",
                        tasks.len() - shown
                    );
                }
                let content = BoardContent::Dual {
                    first: (first, groups.owner(first)),
                    second: (second, groups.owner(second)),
                };
                render(&self.geometry, content, timestamp, &self.layout, &self.fonts)?
            }
            _ => render(
                &self.geometry,
                BoardContent::Single(tasks),
                timestamp,
                &self.layout,
                &self.fonts,
            )?,
        };
        Ok(rendered)
    }

    /// Fetches, renders, writes the preview when configured and shows the result.
    ///
    /// A failed fetch is logged and rendered as an empty board; every other failure aborts
    /// the cycle.
    pub fn refresh<S, D, Tz>(
        &self,
        source: &mut S,
        sink: &mut D,
        now: &DateTime<Tz>,
    ) -> Result<CycleReport>
    where
        S: TaskSource + ?Sized,
        D: DisplaySink + ?Sized,
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        info!("fetching tasks");
        let tasks = match source.fetch() {
            Ok(records) => collect_tasks(records),
            Err(err) => {
                error!("fetch failed, showing an empty board: {err}");
                Vec::new()
            }
        };
        info!("found {} tasks", tasks.len());

        let rendered = self.render(&tasks, &format_timestamp(now))?;

        let preview = match &self.config.display.preview_path {
            Some(path) => {
                save_png(&rendered.canvas, path)?;
                info!("preview saved as {}", path.display());
                Some(path.clone())
            }
            None => None,
        };

        sink.show(&rendered.canvas)?;
        info!(
            "board shown at {}x{}",
            rendered.canvas.width(),
            rendered.canvas.height()
        );

        Ok(CycleReport {
            lists: rendered.lists.into_iter().collect(),
            fetched: tasks.len(),
            preview,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn timestamp_is_twelve_hour() {
        let now = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 18, 21, 5, 0)
            .unwrap();
        assert_eq!(format_timestamp(&now), "Oct 18, 2026 09:05 PM");
    }

    #[test]
    fn dual_board_without_owners_is_rejected() {
        let mut config = BoardConfig::default();
        config.display.mode = ListMode::Dual;
        assert!(matches!(
            Board::new(config),
            Err(ConfigError::MissingOwners)
        ));
    }
}
