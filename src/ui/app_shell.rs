use std::f64::consts::TAU;
use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui::{
    self, pos2, vec2, Align2, Color32, CornerRadius, FontId, Id, Order, PointerButton, Rect,
    RichText, Sense, Stroke, StrokeKind, WidgetInfo, WidgetType,
};

use crate::app::controller::RootView;
use crate::app::events::{AppEvent, Key};
use crate::app::theme::ThemeVariant;
use crate::cache::images::{ImageCache, ImageSlot, UrlFetcher};
use crate::catalog::source::CatalogSource;
use crate::error::{GalleryError, Result};
use crate::infra::config::{AppConfig, GalleryConfig};
use crate::ui::layout::{column_width, contain_size, cover_uv, grid_columns, GRID_GAP};
use crate::ui::palette::Palette;
use crate::ui::view::{
    ElementId, GalleryView, ModalView, Page, Role, TileView, HINT_LINES, LOADING_MESSAGE,
};

const PARTICLE_SPACING: f32 = 100.0;
const PARTICLE_PERIOD_SECS: f64 = 20.0;
const ANIMATION_FRAME: Duration = Duration::from_millis(50);

pub struct GalleryShell {
    root: RootView,
    images: ImageCache,
    tile_min_width: f32,
    tile_height: f32,
}

fn element_id(element: ElementId) -> Id {
    Id::new(("gallery", element))
}

impl GalleryShell {
    pub fn new(root: RootView, images: ImageCache, config: &GalleryConfig) -> Self {
        Self {
            root,
            images,
            tile_min_width: config.tile_min_width,
            tile_height: config.tile_height,
        }
    }

    fn focused_element(&self, ctx: &egui::Context, page: &Page) -> Option<ElementId> {
        let focused = ctx.memory(|memory| memory.focused())?;
        page.tiles()
            .iter()
            .map(|tile| tile.element)
            .find(|element| element_id(*element) == focused)
    }

    /// Feeds this frame's key presses to the root before anything is drawn,
    /// so a prevented Space never reaches the scroll area.
    fn dispatch_keys(&mut self, ctx: &egui::Context) -> bool {
        let page = self.root.render();
        // An aria-modal dialog leaves the page behind it inert.
        let inert = page.modal().is_some_and(|modal| modal.aria_modal);
        let focused = if inert {
            None
        } else {
            self.focused_element(ctx, &page)
        };
        let mut changed = false;

        for (egui_key, key) in [
            (egui::Key::Enter, Key::Enter),
            (egui::Key::Space, Key::Space),
            (egui::Key::Escape, Key::Escape),
        ] {
            if !ctx.input(|input| input.key_pressed(egui_key)) {
                continue;
            }
            let outcome = self.root.dispatch(AppEvent::KeyDown { key, focused });
            if outcome.default_prevented {
                ctx.input_mut(|input| input.consume_key(egui::Modifiers::NONE, egui_key));
            }
            changed |= outcome.changed;
        }
        changed
    }

    fn show_loading(&self, ctx: &egui::Context, palette: &Palette) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.background_top))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space((ui.available_height() / 2.0 - 40.0).max(0.0));
                    let spinner = ui.add(egui::Spinner::new().size(40.0).color(Color32::WHITE));
                    let status = ui.interact(
                        spinner.rect,
                        element_id(ElementId::LoadingIndicator),
                        Sense::hover(),
                    );
                    status.widget_info(|| {
                        WidgetInfo::labeled(WidgetType::ProgressIndicator, true, LOADING_MESSAGE)
                    });
                    ui.add_space(16.0);
                    ui.label(RichText::new(LOADING_MESSAGE).color(Color32::WHITE));
                });
            });
    }

    fn show_failed(
        &self,
        ctx: &egui::Context,
        palette: &Palette,
        reason: &str,
        events: &mut Vec<AppEvent>,
    ) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.background_top))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space((ui.available_height() / 2.0 - 60.0).max(0.0));
                    ui.label(
                        RichText::new("Could not load the gallery")
                            .size(22.0)
                            .color(palette.heading),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(reason).color(palette.text));
                    ui.add_space(16.0);
                    if ui.button("Retry").clicked() {
                        events.push(AppEvent::Click {
                            target: ElementId::RetryButton,
                        });
                    }
                });
            });
    }

    fn show_gallery(
        &mut self,
        ctx: &egui::Context,
        palette: &Palette,
        view: &GalleryView,
        events: &mut Vec<AppEvent>,
    ) {
        let time = ctx.input(|input| input.time);
        let scroll_locked = self.root.document().scroll_locked();

        egui::CentralPanel::default()
            .frame(egui::Frame::new().inner_margin(egui::Margin::same(32)))
            .show(ctx, |ui| {
                paint_background(ui.painter(), ctx.screen_rect(), palette, time);

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&view.title)
                                .size(40.0)
                                .color(palette.heading),
                        );
                        ui.add_space(8.0);
                        for line in HINT_LINES {
                            ui.label(RichText::new(line).size(17.6).color(palette.text));
                        }
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if show_theme_toggle(ui, palette, view) {
                            events.push(AppEvent::Click {
                                target: ElementId::ThemeToggle,
                            });
                        }
                    });
                });
                ui.add_space(48.0);

                egui::ScrollArea::vertical()
                    .enable_scrolling(!scroll_locked)
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.show_grid(ui, palette, &view.tiles, events));
            });

        if let Some(modal) = &view.modal {
            self.show_modal(ctx, palette, modal, events);
        }
    }

    fn show_grid(
        &mut self,
        ui: &mut egui::Ui,
        palette: &Palette,
        tiles: &[TileView],
        events: &mut Vec<AppEvent>,
    ) {
        let width = ui.available_width();
        let columns = grid_columns(width, self.tile_min_width, GRID_GAP);
        let tile_size = vec2(column_width(width, columns, GRID_GAP), self.tile_height);

        for row in tiles.chunks(columns) {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = GRID_GAP;
                for tile in row {
                    if self.show_tile(ui, palette, tile, tile_size) {
                        events.push(AppEvent::Click {
                            target: tile.element,
                        });
                    }
                }
            });
            ui.add_space(GRID_GAP);
        }
    }

    /// Returns whether the tile was clicked with the pointer. Keyboard
    /// activation goes through `dispatch_keys`.
    fn show_tile(
        &mut self,
        ui: &mut egui::Ui,
        palette: &Palette,
        tile: &TileView,
        size: egui::Vec2,
    ) -> bool {
        let id = element_id(tile.element);
        let (slot_rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let mut response = ui.interact(slot_rect, id, Sense::click());
        response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, true, &tile.label));

        let highlighted = response.hovered() || response.has_focus();
        let lift = ui.ctx().animate_bool_with_time(id.with("lift"), highlighted, 0.3);
        let rect = slot_rect.translate(vec2(0.0, -8.0 * lift));

        // Lazy tiles request pixels only once they are on screen.
        let visible = ui.is_rect_visible(rect);
        if visible || !tile.lazy {
            let slot = self.images.get(ui.ctx(), &tile.image.url);
            if let ImageSlot::Broken(reason) = &slot {
                response = response.on_hover_text(reason.as_str());
            }
            if visible {
                let tile_look = TileLook {
                    rect,
                    lift,
                    focused: response.has_focus(),
                };
                paint_tile(ui.painter(), palette, &tile.image.title, &slot, tile_look);
            }
        }

        response.clicked_by(PointerButton::Primary)
    }

    fn show_modal(
        &mut self,
        ctx: &egui::Context,
        palette: &Palette,
        modal: &ModalView,
        events: &mut Vec<AppEvent>,
    ) {
        let screen = ctx.screen_rect();
        let slot = self.images.get(ctx, &modal.image.url);

        egui::Area::new(Id::new("modal_layer"))
            .order(Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let painter = ui.painter().clone();
                // Later interactions sit on top, so each click lands on the
                // innermost element under the pointer.
                let backdrop =
                    ui.interact(screen, element_id(ElementId::ModalBackdrop), Sense::click());
                let kind = match modal.role {
                    Role::Dialog => WidgetType::Window,
                    _ => WidgetType::Other,
                };
                backdrop.widget_info(|| WidgetInfo::labeled(kind, true, modal.accessible_name()));
                painter.rect_filled(screen, CornerRadius::ZERO, palette.backdrop);

                let title_height = 48.0;
                let max_image = vec2(
                    screen.width() * 0.9 - 64.0,
                    screen.height() * 0.8 - title_height,
                )
                .max(vec2(1.0, 1.0));
                let image_size = match &slot {
                    ImageSlot::Ready(texture) => contain_size(texture.size_vec2(), max_image),
                    _ => vec2(480.0, 320.0).min(max_image),
                };

                let content = Rect::from_center_size(
                    screen.center(),
                    vec2(image_size.x, image_size.y + 16.0 + title_height),
                );
                let content_response =
                    ui.interact(content, element_id(ElementId::ModalContent), Sense::click());

                let image_rect = Rect::from_min_size(content.min, image_size);
                let mut image_response =
                    ui.interact(image_rect, element_id(ElementId::ModalImage), Sense::click());
                match &slot {
                    ImageSlot::Ready(texture) => {
                        painter.image(
                            texture.id(),
                            image_rect,
                            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                            Color32::WHITE,
                        );
                    }
                    ImageSlot::Pending => {
                        painter.add(egui::Shape::circle_stroke(
                            image_rect.center(),
                            20.0,
                            Stroke::new(3.0, Color32::WHITE),
                        ));
                    }
                    ImageSlot::Broken(reason) => {
                        paint_placeholder(&painter, image_rect, palette);
                        image_response = image_response.on_hover_text(reason.as_str());
                    }
                }

                let title_rect =
                    Rect::from_min_max(pos2(content.min.x, image_rect.max.y + 16.0), content.max);
                let title_response =
                    ui.interact(title_rect, element_id(ElementId::ModalTitle), Sense::click());
                painter.text(
                    title_rect.center(),
                    Align2::CENTER_CENTER,
                    &modal.image.title,
                    FontId::proportional(24.0),
                    Color32::WHITE,
                );

                let close_rect = Rect::from_min_size(
                    pos2(content.max.x - 40.0, content.min.y - 50.0),
                    vec2(40.0, 40.0),
                );
                let close_response =
                    ui.interact(close_rect, element_id(ElementId::CloseButton), Sense::click());
                close_response
                    .widget_info(|| WidgetInfo::labeled(WidgetType::Button, true, modal.close_label));
                let close_fill = if close_response.hovered() {
                    palette.close_button.gamma_multiply(1.5)
                } else {
                    palette.close_button
                };
                painter.circle_filled(close_rect.center(), 20.0, close_fill);
                painter.text(
                    close_rect.center(),
                    Align2::CENTER_CENTER,
                    "×",
                    FontId::proportional(28.0),
                    Color32::WHITE,
                );

                let clicked = [
                    (close_response.clicked(), ElementId::CloseButton),
                    (title_response.clicked_by(PointerButton::Primary), ElementId::ModalTitle),
                    (image_response.clicked_by(PointerButton::Primary), ElementId::ModalImage),
                    (
                        content_response.clicked_by(PointerButton::Primary),
                        ElementId::ModalContent,
                    ),
                    (
                        backdrop.clicked_by(PointerButton::Primary),
                        ElementId::ModalBackdrop,
                    ),
                ]
                .into_iter()
                .find(|(clicked, _)| *clicked)
                .map(|(_, element)| element);

                if let Some(target) = clicked {
                    events.push(AppEvent::Click { target });
                }
            });
    }

    /// One UI pass. Returns the pointer events it routed to the root.
    fn run_frame(&mut self, ctx: &egui::Context) -> Vec<AppEvent> {
        let now = Instant::now();
        let mut changed = self.root.dispatch(AppEvent::Tick(now)).changed;
        self.images.poll(ctx);
        changed |= self.dispatch_keys(ctx);

        let page = self.root.render();
        let variant = self.root.theme().variant();
        let palette = Palette::for_variant(variant);
        ctx.set_visuals(Palette::visuals(variant));

        let mut events = Vec::new();
        match &page {
            Page::Loading => self.show_loading(ctx, &palette),
            Page::Failed { reason } => self.show_failed(ctx, &palette, reason, &mut events),
            Page::Gallery(view) => {
                self.show_gallery(ctx, &palette, view, &mut events);
                ctx.request_repaint_after(ANIMATION_FRAME);
            }
        }

        for event in &events {
            changed |= self.root.dispatch(*event).changed;
        }

        if changed {
            ctx.request_repaint();
        } else if let Some(wait) = self.root.next_wakeup(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
        events
    }
}

impl eframe::App for GalleryShell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }
}

/// Returns whether the toggle was activated.
fn show_theme_toggle(ui: &mut egui::Ui, palette: &Palette, view: &GalleryView) -> bool {
    let (rect, response) = ui.allocate_exact_size(vec2(80.0, 40.0), Sense::click());
    let response = response.on_hover_text(view.toggle.label);
    response.widget_info(|| WidgetInfo::labeled(WidgetType::Button, true, view.toggle.label));

    let light = ui.ctx().animate_bool_with_time(
        element_id(ElementId::ThemeToggle),
        view.theme == ThemeVariant::Light,
        0.5,
    );
    let painter = ui.painter();
    painter.rect_filled(rect, CornerRadius::same(20), palette.toggle_track);
    painter.rect_stroke(
        rect,
        CornerRadius::same(20),
        Stroke::new(1.0, Color32::from_white_alpha(77)),
        StrokeKind::Inside,
    );
    let thumb_center = pos2(rect.min.x + 20.0 + 40.0 * light, rect.center().y);
    painter.circle_filled(thumb_center, 16.0, palette.toggle_thumb);
    painter.text(
        thumb_center,
        Align2::CENTER_CENTER,
        view.toggle.icon,
        FontId::proportional(16.0),
        Color32::WHITE,
    );
    if response.has_focus() {
        painter.rect_stroke(
            rect.expand(4.0),
            CornerRadius::same(24),
            Stroke::new(2.0, Color32::from_white_alpha(128)),
            StrokeKind::Outside,
        );
    }

    response.clicked()
}

/// Where and how a tile is drawn this frame.
#[derive(Debug, Clone, Copy)]
struct TileLook {
    rect: Rect,
    lift: f32,
    focused: bool,
}

fn paint_tile(
    painter: &egui::Painter,
    palette: &Palette,
    title: &str,
    slot: &ImageSlot,
    look: TileLook,
) {
    let TileLook { rect, lift, focused } = look;
    let rounding = CornerRadius::same(12);
    painter.rect_filled(rect, rounding, palette.tile_fill);

    match slot {
        ImageSlot::Ready(texture) => {
            let uv = cover_uv(texture.size_vec2(), rect.size());
            painter.image(texture.id(), rect, uv, Color32::WHITE);
        }
        ImageSlot::Pending => {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "…",
                FontId::proportional(24.0),
                palette.text,
            );
        }
        ImageSlot::Broken(_) => paint_placeholder(painter, rect, palette),
    }

    painter.rect_stroke(
        rect,
        rounding,
        Stroke::new(1.0, palette.tile_stroke),
        StrokeKind::Inside,
    );

    if lift > 0.0 {
        let overlay = Rect::from_min_max(pos2(rect.min.x, rect.max.y - 56.0), rect.max);
        painter.rect_filled(
            overlay,
            CornerRadius {
                nw: 0,
                ne: 0,
                sw: 12,
                se: 12,
            },
            palette.tile_overlay.gamma_multiply(lift),
        );
        painter.text(
            overlay.left_center() + vec2(16.0, 0.0),
            Align2::LEFT_CENTER,
            title,
            FontId::proportional(17.6),
            Color32::WHITE.gamma_multiply(lift),
        );
    }

    if focused {
        painter.rect_stroke(
            rect.expand(2.0),
            rounding,
            Stroke::new(3.0, Color32::WHITE),
            StrokeKind::Outside,
        );
    }
}

fn paint_placeholder(painter: &egui::Painter, rect: Rect, palette: &Palette) {
    painter.rect_filled(rect, CornerRadius::same(12), palette.placeholder);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        "image unavailable",
        FontId::proportional(15.0),
        palette.text,
    );
}

fn paint_background(painter: &egui::Painter, rect: Rect, palette: &Palette, time: f64) {
    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), palette.background_top);
    mesh.colored_vertex(rect.right_top(), palette.background_top);
    mesh.colored_vertex(rect.left_bottom(), palette.background_bottom);
    mesh.colored_vertex(rect.right_bottom(), palette.background_bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(2, 1, 3);
    painter.add(egui::Shape::mesh(mesh));

    let phase = (time / PARTICLE_PERIOD_SECS * TAU).cos() as f32;
    let drift = -10.0 * (1.0 - phase);
    let mut y = rect.min.y;
    while y < rect.max.y {
        let mut x = rect.min.x;
        while x < rect.max.x {
            painter.circle_filled(
                pos2(x + 25.0, y + 25.0 + drift),
                palette.particle_radius,
                palette.particle,
            );
            painter.circle_filled(
                pos2(x + 75.0, y + 75.0 + drift),
                palette.particle_radius / 2.0,
                palette.particle,
            );
            x += PARTICLE_SPACING;
        }
        y += PARTICLE_SPACING;
    }
}

pub fn launch_window(config: &AppConfig, source: Box<dyn CatalogSource>) -> Result<()> {
    let fetcher = Arc::new(UrlFetcher::new(&config.fetch)?);
    let gallery = config.gallery.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(gallery.title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        &config.gallery.title,
        options,
        Box::new(move |_cc| {
            let mut root = RootView::new(source, &gallery);
            root.mount(Instant::now());
            Ok(Box::new(GalleryShell::new(root, ImageCache::new(fetcher), &gallery)))
        }),
    )
    .map_err(|error| GalleryError::Ui(error.to_string()))
}

#[cfg(test)]
mod tests {
    use eframe::egui::{Event, Modifiers, RawInput};

    use super::*;
    use crate::cache::images::ImageFetcher;
    use crate::catalog::builtin::BuiltinCatalog;

    struct OfflineFetcher;

    impl ImageFetcher for OfflineFetcher {
        fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            Err(GalleryError::Fetch {
                url: url.to_string(),
                reason: "offline".to_string(),
            })
        }
    }

    fn loaded_shell() -> (GalleryShell, egui::Context) {
        let config = GalleryConfig {
            load_delay_ms: 0,
            ..GalleryConfig::default()
        };
        let mut root = RootView::new(Box::new(BuiltinCatalog), &config);
        root.mount(Instant::now());
        let mut shell =
            GalleryShell::new(root, ImageCache::new(Arc::new(OfflineFetcher)), &config);

        let ctx = egui::Context::default();
        frame(&mut shell, &ctx, Vec::new());
        assert_eq!(shell.root.render().tiles().len(), 12);
        (shell, ctx)
    }

    /// Runs one egui frame and returns the pointer events the shell routed.
    fn frame(shell: &mut GalleryShell, ctx: &egui::Context, events: Vec<Event>) -> Vec<AppEvent> {
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(pos2(0.0, 0.0), vec2(1280.0, 820.0))),
            events,
            ..RawInput::default()
        };
        let mut routed = Vec::new();
        let _ = ctx.run(input, |ctx| routed.extend(shell.run_frame(ctx)));
        routed
    }

    fn key_press(key: egui::Key, modifiers: Modifiers) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    fn focus(ctx: &egui::Context, element: ElementId) {
        ctx.memory_mut(|memory| memory.request_focus(element_id(element)));
    }

    fn selected_title(shell: &GalleryShell) -> Option<String> {
        shell.root.view_state().selected_image.map(|image| image.title)
    }

    fn key_left_in_input(ctx: &egui::Context, key: egui::Key) -> bool {
        ctx.input(|input| {
            input
                .events
                .iter()
                .any(|event| matches!(event, Event::Key { key: seen, .. } if *seen == key))
        })
    }

    #[test]
    fn enter_on_focused_tile_opens_it_once_without_a_click() {
        let (mut shell, ctx) = loaded_shell();
        focus(&ctx, ElementId::Tile(2));

        let routed = frame(
            &mut shell,
            &ctx,
            vec![key_press(egui::Key::Enter, Modifiers::NONE)],
        );

        assert!(routed.is_empty(), "pointer path fired too: {routed:?}");
        assert_eq!(selected_title(&shell).as_deref(), Some("Kali Linux Logo"));
        assert_eq!(shell.root.document().listeners_for(Key::Escape).len(), 1);
        assert!(!key_left_in_input(&ctx, egui::Key::Enter));
    }

    #[test]
    fn space_and_shift_space_are_consumed_on_a_focused_tile() {
        for modifiers in [Modifiers::NONE, Modifiers::SHIFT] {
            let (mut shell, ctx) = loaded_shell();
            focus(&ctx, ElementId::Tile(2));

            let routed = frame(&mut shell, &ctx, vec![key_press(egui::Key::Space, modifiers)]);

            assert!(routed.is_empty());
            assert_eq!(selected_title(&shell).as_deref(), Some("Kali Linux Logo"));
            assert!(shell.root.document().scroll_locked());
            assert!(!key_left_in_input(&ctx, egui::Key::Space));
        }
    }

    #[test]
    fn keys_without_a_focused_tile_are_left_alone() {
        let (mut shell, ctx) = loaded_shell();

        let routed = frame(
            &mut shell,
            &ctx,
            vec![key_press(egui::Key::Space, Modifiers::NONE)],
        );

        assert!(routed.is_empty());
        assert_eq!(selected_title(&shell), None);
        assert!(key_left_in_input(&ctx, egui::Key::Space));
    }

    #[test]
    fn tiles_behind_an_open_dialog_ignore_keyboard_activation() {
        let (mut shell, ctx) = loaded_shell();
        focus(&ctx, ElementId::Tile(2));
        frame(
            &mut shell,
            &ctx,
            vec![key_press(egui::Key::Enter, Modifiers::NONE)],
        );

        focus(&ctx, ElementId::Tile(5));
        let routed = frame(
            &mut shell,
            &ctx,
            vec![key_press(egui::Key::Enter, Modifiers::NONE)],
        );

        assert!(routed.is_empty());
        assert_eq!(selected_title(&shell).as_deref(), Some("Kali Linux Logo"));

        frame(
            &mut shell,
            &ctx,
            vec![key_press(egui::Key::Escape, Modifiers::NONE)],
        );
        assert_eq!(selected_title(&shell), None);
        assert!(!shell.root.document().scroll_locked());
    }

    #[test]
    fn pointer_click_on_a_tile_is_routed_as_a_click() {
        let (mut shell, ctx) = loaded_shell();
        let rect = ctx
            .read_response(element_id(ElementId::Tile(0)))
            .map(|response| response.rect)
            .expect("tile laid out");
        let pos = rect.center();

        frame(
            &mut shell,
            &ctx,
            vec![
                Event::PointerMoved(pos),
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed: true,
                    modifiers: Modifiers::NONE,
                },
            ],
        );
        let routed = frame(
            &mut shell,
            &ctx,
            vec![Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: false,
                modifiers: Modifiers::NONE,
            }],
        );

        assert_eq!(
            routed,
            vec![AppEvent::Click {
                target: ElementId::Tile(0)
            }]
        );
        assert_eq!(
            shell.root.view_state().selected_image.map(|image| image.id.get()),
            Some(1)
        );
    }
}
