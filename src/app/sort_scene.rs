use std::io;

use crossterm::{
    cursor,
    event::KeyCode,
    queue,
    style::{self, Color, Stylize},
};

use crate::{
    app::{renderer::screen_coord, scene::Scene},
    generators::rng,
    sorts::{BarState, BubbleSort, InsertionSort, SortAnimation, VALUE_RANGE, random_values},
};

/// Which sort the scene animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKind {
    Bubble,
    Insertion,
}

impl SortKind {
    fn build(self, values: Vec<u32>) -> Box<dyn SortAnimation> {
        match self {
            SortKind::Bubble => Box::new(BubbleSort::new(values)),
            SortKind::Insertion => Box::new(InsertionSort::new(values)),
        }
    }
}

/// Bar chart of a sort in progress.
pub struct SortScene {
    kind: SortKind,
    bars: usize,
    seed: Option<u64>,
    /// Number of reshuffles so far, mixed into a fixed seed
    shuffles: u64,
    animation: Box<dyn SortAnimation>,
    paused: bool,
    steps_per_frame: u32,
}

impl SortScene {
    const MAX_STEPS_PER_FRAME: u32 = 64;

    pub fn new(kind: SortKind, bars: usize, seed: Option<u64>) -> Self {
        let values = random_values(bars, &mut rng(seed));
        SortScene {
            kind,
            bars,
            seed,
            shuffles: 0,
            animation: kind.build(values),
            paused: false,
            steps_per_frame: 1,
        }
    }

    fn reshuffle(&mut self) {
        self.shuffles += 1;
        let seed = self.seed.map(|seed| seed.wrapping_add(self.shuffles));
        self.animation = self.kind.build(random_values(self.bars, &mut rng(seed)));
        tracing::info!("[sort scene] reshuffled {} bars", self.bars);
    }

    fn bar_color(state: BarState) -> Color {
        match state {
            BarState::Unsorted => Color::White,
            BarState::Comparing => Color::Red,
            BarState::Active => Color::Rgb {
                r: 255,
                g: 165,
                b: 0,
            },
            BarState::Sorted => Color::Green,
        }
    }
}

impl Scene for SortScene {
    fn update(&mut self) {
        if self.paused {
            return;
        }
        for _ in 0..self.steps_per_frame {
            if !self.animation.step() {
                break;
            }
        }
    }

    fn render(&self, frame: &mut Vec<u8>, area: (u16, u16)) -> io::Result<()> {
        let (width, height) = (usize::from(area.0), usize::from(area.1));
        let values = self.animation.values();
        if values.is_empty() || width == 0 || height == 0 {
            return Ok(());
        }

        // Each bar gets a slot with a one column gap, as long as there is room for it
        let slot = (width / values.len()).max(1);
        let bar_width = if slot > 1 { slot - 1 } else { 1 };
        let visible = values.len().min(width / slot);
        let max_value = *VALUE_RANGE.end() as usize;
        let x_offset = (width - visible * slot) / 2;

        for (i, &value) in values.iter().enumerate().take(visible) {
            let bar_height = (value as usize * height).div_ceil(max_value).clamp(1, height);
            let color = SortScene::bar_color(self.animation.bar_state(i));
            let bar = "█".repeat(bar_width);
            let x = screen_coord(x_offset + i * slot);
            for level in 0..bar_height {
                queue!(
                    frame,
                    cursor::MoveTo(x, screen_coord(height - 1 - level)),
                    style::PrintStyledContent(bar.as_str().with(color))
                )?;
            }
        }
        Ok(())
    }

    fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('r') => self.reshuffle(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.steps_per_frame = (self.steps_per_frame * 2).min(Self::MAX_STEPS_PER_FRAME);
            }
            KeyCode::Char('-') => self.steps_per_frame = (self.steps_per_frame / 2).max(1),
            _ => {}
        }
    }

    fn status(&self) -> String {
        let stats = self.animation.stats();
        let state = if self.animation.is_complete() {
            "done"
        } else if self.paused {
            "paused"
        } else {
            "running"
        };
        format!(
            "{} ({}) | comparisons: {} | writes: {} | speed: {}x | space: pause  r: reshuffle  +/-: speed  q/Esc: quit",
            self.animation.name(),
            state,
            stats.comparisons,
            stats.writes,
            self.steps_per_frame
        )
    }
}
