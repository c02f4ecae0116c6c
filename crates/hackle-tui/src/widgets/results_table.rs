//! Results table widget — the sortable story list filling the screen.
//!
//! # Navigation (when the pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Move cursor up one row (scrolls view if needed) |
//! | `↓` / `j` | Move cursor down one row |
//! | `PageUp` / `Ctrl+u` | Scroll up one page |
//! | `PageDown` / `Ctrl+d` | Scroll down one page |
//! | `g` / `G` | Jump to the first / last story |
//!
//! # Scroll semantics
//!
//! `scroll_offset` = number of rows hidden above the viewport (0 = top).
//! `cursor` = absolute index into the sorted hit list. The cursor is always
//! kept within the visible window; moving it past the edge auto-scrolls.
//!
//! The widget renders whatever sorted slice the shell hands it each frame —
//! it never sorts or caches hits itself.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use hackle_core::{Hit, SortKey};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ResultsTableState {
    /// Absolute index into the sorted hit list of the highlighted row.
    pub cursor: usize,
    /// Number of rows hidden above the viewport (0 = top).
    pub scroll_offset: usize,
    /// Cached from the last render so `handle()` can do cursor-aware scrolling.
    last_height: Cell<usize>,
}

impl ResultsTableState {
    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Returns `(start, end)` — the exclusive range of rows currently visible.
    fn visible_range(&self, total: usize) -> (usize, usize) {
        let start = self.scroll_offset.min(total);
        let end = (start + self.height()).min(total);
        (start, end)
    }

    /// Keep cursor and scroll valid after the hit list changed length
    /// (fresh search, sort change, appended page).
    pub fn clamp(&mut self, total: usize) {
        if total == 0 {
            self.cursor = 0;
            self.scroll_offset = 0;
            return;
        }
        self.cursor = self.cursor.min(total - 1);
        self.scroll_offset = self.scroll_offset.min(total.saturating_sub(1));
    }

    /// Handle a navigation event from the app shell. `total` is the current
    /// length of the displayed hit list.
    pub fn handle(&mut self, event: &AppEvent, total: usize) {
        if total == 0 {
            return;
        }

        match event {
            // ── Row-by-row cursor movement ─────────────────────────────────
            AppEvent::Nav(Direction::Up) => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
                // If the cursor scrolled above the window, pull the window up
                let (start, _) = self.visible_range(total);
                if self.cursor < start {
                    self.scroll_offset = self.cursor;
                }
                tracing::debug!(
                    cursor = self.cursor,
                    scroll_offset = self.scroll_offset,
                    "table: cursor up"
                );
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < total {
                    self.cursor += 1;
                }
                // If the cursor scrolled below the window, push the window down
                let (_, end) = self.visible_range(total);
                if self.cursor >= end {
                    self.scroll_offset = self.cursor + 1 - self.height();
                }
                tracing::debug!(
                    cursor = self.cursor,
                    scroll_offset = self.scroll_offset,
                    "table: cursor down"
                );
            }

            // ── Page scrolling ─────────────────────────────────────────────
            AppEvent::ScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(PAGE_STEP);
                let (start, _) = self.visible_range(total);
                self.cursor = start;
                tracing::debug!(
                    scroll_offset = self.scroll_offset,
                    cursor = self.cursor,
                    "table: page up"
                );
            }
            AppEvent::ScrollDown => {
                let max_offset = total.saturating_sub(self.height());
                self.scroll_offset = (self.scroll_offset + PAGE_STEP).min(max_offset);
                let (_, end) = self.visible_range(total);
                self.cursor = end.saturating_sub(1);
                tracing::debug!(
                    scroll_offset = self.scroll_offset,
                    cursor = self.cursor,
                    "table: page down"
                );
            }

            // ── Jumps ──────────────────────────────────────────────────────
            AppEvent::ScrollToTop => {
                self.cursor = 0;
                self.scroll_offset = 0;
            }
            AppEvent::ScrollToBottom => {
                self.cursor = total - 1;
                self.scroll_offset = total.saturating_sub(self.height());
            }

            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultsTable<'a> {
    hits: &'a [Hit],
    state: &'a ResultsTableState,
    focused: bool,
    theme: &'a Theme,
    sort_key: SortKey,
    sort_reverse: bool,
    show_url: bool,
    title_pct: u16,
    author_pct: u16,
}

impl<'a> ResultsTable<'a> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        hits: &'a [Hit],
        state: &'a ResultsTableState,
        focused: bool,
        theme: &'a Theme,
        sort_key: SortKey,
        sort_reverse: bool,
        show_url: bool,
        title_pct: u16,
        author_pct: u16,
    ) -> Self {
        Self {
            hits,
            state,
            focused,
            theme,
            sort_key,
            sort_reverse,
            show_url,
            title_pct,
            author_pct,
        }
    }

    fn column_widths(&self, width: usize) -> (usize, usize, usize, usize) {
        let title_w = width * self.title_pct as usize / 100;
        let author_w = width * self.author_pct as usize / 100;
        let rest = width.saturating_sub(title_w + author_w);
        let comments_w = rest / 2;
        let points_w = rest - comments_w;
        (title_w, author_w, comments_w, points_w)
    }

    fn header_line(&self, widths: (usize, usize, usize, usize)) -> Line<'static> {
        let marker = if self.sort_reverse { "▲" } else { "▼" };
        let label = |key: SortKey, name: &str, width: usize| {
            let text = if self.sort_key == key {
                format!("{name} {marker}")
            } else {
                name.to_string()
            };
            let style = if self.sort_key == key {
                self.theme.header_active
            } else {
                self.theme.header_inactive
            };
            Span::styled(pad(&text, width), style)
        };
        Line::from(vec![
            label(SortKey::Title, "Title", widths.0),
            label(SortKey::Author, "Author", widths.1),
            label(SortKey::Comments, "Comments", widths.2),
            label(SortKey::Points, "Points", widths.3),
        ])
    }

    fn row_line(&self, hit: &Hit, widths: (usize, usize, usize, usize)) -> Line<'static> {
        let mut spans = self.title_spans(hit, widths.0);
        spans.extend([
            Span::styled(pad(&hit.author, widths.1), self.theme.author_style(&hit.author)),
            Span::styled(pad(&hit.num_comments.to_string(), widths.2), self.theme.col_numeric),
            Span::styled(pad(&hit.points.to_string(), widths.3), self.theme.col_numeric),
        ]);
        Line::from(spans)
    }

    /// Title column: the story title, then the URL dimmed after it when it
    /// fits, padded to exactly `width` columns.
    fn title_spans(&self, hit: &Hit, width: usize) -> Vec<Span<'static>> {
        let title: String = hit.title.chars().take(width.saturating_sub(1)).collect();
        let mut used = title.chars().count();
        let mut spans = vec![Span::styled(title, self.theme.col_title)];

        if self.show_url && !hit.url.is_empty() && used + 4 < width {
            let room = width - used - 3;
            let url: String = hit.url.chars().take(room).collect();
            used += 2 + url.chars().count();
            spans.push(Span::styled(format!("  {url}"), self.theme.col_url));
        }

        spans.push(Span::raw(" ".repeat(width - used.min(width))));
        spans
    }
}

impl Widget for ResultsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered().title("Stories").border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 {
            return;
        }

        // First inner row is the column header; the rest hold stories.
        let header_area = Rect { height: 1, ..inner };
        let rows_area = Rect {
            y: inner.y + 1,
            height: inner.height - 1,
            ..inner
        };

        let height = rows_area.height as usize;
        // Cache for handle() — safe because draw always runs before handle()
        self.state.last_height.set(height);

        // Text columns leave a 1-column strip for the scrollbar.
        let text_width = rows_area.width.saturating_sub(1) as usize;
        let widths = self.column_widths(text_width);

        Paragraph::new(self.header_line(widths)).render(header_area, buf);

        let total = self.hits.len();
        let start = self.state.scroll_offset.min(total);
        let end = (start + height).min(total);

        // Which row (0-based within the visible window) holds the cursor?
        let cursor_row: Option<usize> =
            if self.focused && self.state.cursor >= start && self.state.cursor < end {
                Some(self.state.cursor - start)
            } else {
                None
            };

        let lines: Vec<Line<'static>> = self.hits[start..end]
            .iter()
            .enumerate()
            .map(|(row, hit)| {
                let mut line = self.row_line(hit, widths);
                if Some(row) == cursor_row {
                    line = line.patch_style(Style::default().add_modifier(Modifier::REVERSED));
                }
                line
            })
            .collect();

        let text_area = Rect { width: rows_area.width.saturating_sub(1), ..rows_area };
        let sb_area = Rect {
            x: rows_area.right().saturating_sub(1),
            width: 1,
            ..rows_area
        };

        Paragraph::new(lines).render(text_area, buf);

        if total > 0 {
            let mut sb_state = ScrollbarState::new(total)
                .position(start)
                .viewport_content_length(height);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

/// Pad or truncate `s` to exactly `width` display columns (char-counted).
fn pad(s: &str, width: usize) -> String {
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    let used = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - used.min(width)));
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
