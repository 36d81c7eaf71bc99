//! 应用层：把轮播状态、布局测量、动画和 UI 运行时组装成一个可渲染的视图。

mod tick;
pub mod theme;

use crate::core::event::{InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crate::core::view::{EventResult, View};
use crate::kernel::services::ports::{AnimationSettings, HeadingSettings, Settings, ThemeSettings};
use crate::kernel::{AnimatedValue, Carousel, CarouselAction, LayoutMeasurer, Subscription};
use crate::models::CarouselItem;
use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;
use crate::ui::core::input::{ScrollDir, UiEvent};
use crate::ui::core::painter::Painter;
use crate::ui::core::runtime::UiRuntime;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::tree::{NodeKind, Side, UiTree};
use crate::ui::core::widget::{Ui, Widget};
use crate::views::{CarouselStyles, CarouselView};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant, SystemTime};
use theme::{TerminalColorSupport, UiTheme};

const SETTINGS_CHECK_INTERVAL: Duration = Duration::from_secs(1);
/// Buttons snap once they are this close (in widths) to fully shown/hidden.
const BUTTON_EPSILON: f64 = 0.05;

pub struct App {
    items: Vec<CarouselItem>,
    carousel: Carousel,
    measurer: LayoutMeasurer,
    resize_rx: mpsc::Receiver<u32>,
    _resize_subscription: Subscription,
    strip: AnimatedValue,
    left_button: AnimatedValue,
    right_button: AnimatedValue,
    heading: HeadingSettings,
    animation: AnimationSettings,
    theme_settings: ThemeSettings,
    color_support: TerminalColorSupport,
    theme: UiTheme,
    painter: Painter,
    tree: UiTree,
    runtime: UiRuntime,
    needs_redraw: bool,
    settings_path: Option<PathBuf>,
    last_settings_check: Instant,
    last_settings_modified: Option<SystemTime>,
}

impl App {
    pub fn new(items: Vec<CarouselItem>, settings: &Settings) -> Self {
        let carousel = Carousel::new(settings.carousel, items.len());

        let measurer = LayoutMeasurer::new();
        let (resize_tx, resize_rx) = mpsc::channel();
        let subscription = measurer.subscribe(move |width| {
            let _ = resize_tx.send(width);
        });

        let speed = settings.animation.speed;
        let button = |shown: bool| {
            AnimatedValue::new(if shown { 0.0 } else { 1.0 }, speed).with_epsilon(BUTTON_EPSILON)
        };
        let left_button = button(carousel.can_shift_left());
        let right_button = button(carousel.can_shift_right());

        let mut app = Self {
            items,
            carousel,
            measurer,
            resize_rx,
            _resize_subscription: subscription,
            strip: AnimatedValue::new(0.0, speed),
            left_button,
            right_button,
            heading: settings.heading.clone(),
            animation: settings.animation,
            theme_settings: settings.theme.clone(),
            color_support: TerminalColorSupport::TrueColor,
            theme: UiTheme::default(),
            painter: Painter::new(),
            tree: UiTree::new(),
            runtime: UiRuntime::new(),
            needs_redraw: true,
            settings_path: None,
            last_settings_check: Instant::now(),
            last_settings_modified: None,
        };
        app.rebuild_theme();
        tracing::info!(
            items = app.items.len(),
            stride = app.carousel.stride(),
            "carousel app created"
        );
        app
    }

    /// 启用设置文件热重载
    pub fn with_settings_path(mut self, path: Option<PathBuf>) -> Self {
        self.last_settings_modified = path
            .as_ref()
            .and_then(|p| std::fs::metadata(p).and_then(|m| m.modified()).ok());
        self.settings_path = path;
        self
    }

    pub fn set_color_support(&mut self, support: TerminalColorSupport) {
        self.color_support = support;
        self.rebuild_theme();
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn theme(&self) -> &UiTheme {
        &self.theme
    }

    pub fn tree(&self) -> &UiTree {
        &self.tree
    }

    pub fn frame_interval(&self) -> Duration {
        self.animation.frame_interval()
    }

    pub fn is_animating(&self) -> bool {
        self.strip.is_animating()
            || self.left_button.is_animating()
            || self.right_button.is_animating()
    }

    /// Translation currently painted for the strip (trails the offset while animating).
    pub fn strip_position(&self) -> i32 {
        self.strip.value().round() as i32
    }

    pub fn dispatch(&mut self, action: CarouselAction) -> bool {
        let first_measurement = matches!(action, CarouselAction::Resize { .. })
            && self.carousel.state().container_width.is_none();
        if !self.carousel.dispatch(action) {
            return false;
        }
        // Buttons take their first measured state without an intro animation.
        self.sync_animation_targets(first_measurement);
        true
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        let speed = settings.animation.speed;
        for value in [
            &mut self.strip,
            &mut self.left_button,
            &mut self.right_button,
        ] {
            value.set_speed(speed);
        }
        self.animation = settings.animation;
        self.heading = settings.heading.clone();
        self.theme_settings = settings.theme.clone();
        self.rebuild_theme();

        if self.carousel.reconfigure(settings.carousel) {
            self.sync_animation_targets(false);
        }
        self.needs_redraw = true;
    }

    fn rebuild_theme(&mut self) {
        let mut theme = UiTheme::default();
        theme.apply_settings(&self.theme_settings);
        theme.apply_color_support(self.color_support);
        self.theme = theme;
    }

    fn sync_animation_targets(&mut self, snap: bool) {
        let hidden = |shown: bool| if shown { 0.0 } else { 1.0 };
        let targets = [
            (&mut self.strip, self.carousel.offset() as f64),
            (&mut self.left_button, hidden(self.carousel.can_shift_left())),
            (&mut self.right_button, hidden(self.carousel.can_shift_right())),
        ];
        for (value, target) in targets {
            if snap {
                value.snap_to(target);
            } else {
                value.set_target(target);
            }
        }
    }

    fn poll_resize(&mut self) -> bool {
        let mut changed = false;
        while let Ok(width) = self.resize_rx.try_recv() {
            changed |= self.dispatch(CarouselAction::Resize { width });
        }
        changed
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        if key.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => EventResult::Quit,
                _ => EventResult::Ignored,
            };
        }

        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return EventResult::Quit,
            KeyCode::Left | KeyCode::Char('h') => CarouselAction::ShiftLeft,
            KeyCode::Right | KeyCode::Char('l') => CarouselAction::ShiftRight,
            _ => return EventResult::Ignored,
        };
        changed_to_result(self.dispatch(action))
    }

    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            UiEvent::HoverChanged { .. } => true,
            UiEvent::Click {
                target: NodeKind::NavButton { side },
                ..
            } => self.dispatch(shift_for(side)),
            UiEvent::Click { .. } => false,
            UiEvent::Scroll { dir, .. } => self.dispatch(match dir {
                ScrollDir::Left => CarouselAction::ShiftLeft,
                ScrollDir::Right => CarouselAction::ShiftRight,
            }),
        }
    }

    fn styles(&self) -> CarouselStyles {
        let t = &self.theme;
        let fg = |c| Style::default().fg(c);
        let card = Style::default().bg(t.card_bg);
        let button = Style::default().fg(t.button_fg).bg(t.button_bg);
        CarouselStyles {
            heading: fg(t.heading_fg).add_mod(Mod::BOLD),
            subtitle: fg(t.subtitle_fg),
            card,
            card_border: card.patch(fg(t.card_border)),
            card_hover_border: card.patch(fg(t.card_hover_border)),
            category: fg(t.category_fg),
            title: fg(t.title_fg),
            description: fg(t.description_fg),
            url: fg(t.url_fg).add_mod(Mod::DIM),
            button,
            button_hover: button.bg(t.button_hover_bg),
        }
    }
}

impl View for App {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(_) => {
                let out = self.runtime.on_input(event, &self.tree);
                let mut changed = out.needs_redraw;
                for ui_event in out.events {
                    changed |= self.handle_ui_event(ui_event);
                }
                changed_to_result(changed)
            }
            // The next render re-measures the container.
            InputEvent::Resize(..) => EventResult::Consumed,
            InputEvent::FocusGained | InputEvent::FocusLost | InputEvent::Paste(_) => {
                EventResult::Ignored
            }
        }
    }

    fn render(&mut self, backend: &mut dyn Backend, area: Rect) {
        self.measurer.observe(area);
        self.poll_resize();

        let styles = self.styles();
        self.painter.clear();
        self.tree.clear();
        let mut view = CarouselView {
            items: &self.items,
            config: self.carousel.config(),
            heading: &self.heading,
            strip_offset: self.strip.value().round() as i32,
            left_hidden: self.left_button.value(),
            right_hidden: self.right_button.value(),
            hovered: self.runtime.hovered(),
            styles,
        };
        let mut ui = Ui::new(area, &mut self.painter, &mut self.tree);
        view.ui(&mut ui);

        // Cards move under a resting pointer while the strip animates.
        self.needs_redraw |= self.runtime.refresh_hover(&self.tree);

        backend.draw(area, self.painter.cmds());
    }
}

fn shift_for(side: Side) -> CarouselAction {
    match side {
        Side::Left => CarouselAction::ShiftLeft,
        Side::Right => CarouselAction::ShiftRight,
    }
}

fn changed_to_result(changed: bool) -> EventResult {
    if changed {
        EventResult::Consumed
    } else {
        EventResult::Ignored
    }
}

#[cfg(test)]
#[path = "../../tests/unit/app/mod.rs"]
mod tests;
