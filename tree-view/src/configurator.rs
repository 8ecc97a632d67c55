//! Single-screen Christmas tree configurator built with eframe/egui.
//!
//! [`Configurator`] owns the [`ParameterStore`] and the [`RenderBinding`],
//! lays out the controls and paints the tree below them every frame.

use eframe::App;
use rand::rngs::ThreadRng;
use tree_core::{
    binding::RenderBinding, config::Config, store::ParameterStore, types::CanvasSize,
};

use crate::surface::PainterSurface;

pub const TITLE: &str = "Christmas Tree Configurator";

/// Label shown above the tree size slider; the scale is shown as a percentage.
pub fn tree_scale_label(tree_scale: f32) -> String {
    format!("Tree size: {} %", (tree_scale * 100.0) as i32)
}

/// Label shown above the ornament size slider.
pub fn ornament_size_label(ornament_size: f32) -> String {
    format!("Ornament size: {} cm", ornament_size as i32)
}

/// Root application state.
///
/// Widgets never touch the parameters directly: they call the store, and
/// the store's observer marks the binding stale and asks egui to repaint.
///
/// ### Fields
/// - `cfg` - Slider ranges and canvas height.
/// - `store` - Current render parameters.
/// - `binding` - Cached draw commands, refreshed when stale or resized.
/// - `rng` - Random source for the color buttons.
pub struct Configurator {
    cfg: Config,
    store: ParameterStore,
    binding: RenderBinding,
    rng: ThreadRng,
}

impl Configurator {
    /// Creates the configurator with [`Config::default`].
    pub fn new(ctx: &egui::Context) -> Self {
        Self::with_config(ctx, Config::default())
    }

    /// Creates the configurator and wires the store to the binding.
    ///
    /// ### Parameters
    /// - `ctx` - egui context that is asked to repaint after each mutation.
    /// - `cfg` - Startup configuration.
    pub fn with_config(ctx: &egui::Context, cfg: Config) -> Self {
        let binding = RenderBinding::new();
        let mut store = ParameterStore::new(cfg.initial);

        let mut mark_stale = binding.observer();
        let repaint_ctx = ctx.clone();
        store.subscribe(move |params| {
            mark_stale(params);
            repaint_ctx.request_repaint();
        });

        Self {
            cfg,
            store,
            binding,
            rng: rand::rng(),
        }
    }

    /// Builds the title, sliders and color buttons.
    fn ui_controls(&mut self, ui: &mut egui::Ui) {
        let params = self.store.snapshot();

        ui.heading(TITLE);
        ui.add_space(16.0);

        ui.label(tree_scale_label(params.tree_scale));
        let mut tree_scale = params.tree_scale;
        if ui
            .add(
                egui::Slider::new(&mut tree_scale, self.cfg.tree_scale.as_inclusive())
                    .show_value(false)
                    .clamping(egui::SliderClamping::Never),
            )
            .changed()
        {
            self.store.set_tree_scale(tree_scale);
        }

        ui.label(ornament_size_label(params.ornament_size));
        let mut ornament_size = params.ornament_size;
        if ui
            .add(
                egui::Slider::new(&mut ornament_size, self.cfg.ornament_size.as_inclusive())
                    .show_value(false)
                    .clamping(egui::SliderClamping::Never),
            )
            .changed()
        {
            self.store.set_ornament_size(ornament_size);
        }

        if ui.button("Change ornament color").clicked() {
            self.store.randomize_ornament_color(&mut self.rng);
        }

        if ui.button("Change light color").clicked() {
            self.store.randomize_light_color(&mut self.rng);
        }
    }

    /// Allocates the canvas below the controls and paints the tree into it.
    fn ui_canvas(&mut self, ui: &mut egui::Ui) {
        let size = egui::vec2(ui.available_width(), self.cfg.canvas_height);
        let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());
        let canvas = CanvasSize::new(rect.width(), rect.height());

        let params = self.store.snapshot();
        let commands = self.binding.frame(&params, canvas);

        // Collapsed window; nothing visible to paint.
        if !canvas.is_drawable() {
            return;
        }

        let painter = ui.painter_at(rect);
        let mut surface = PainterSurface::new(&painter, rect.min);
        for command in commands {
            command.issue(&mut surface);
        }
    }

    /// Builds the whole screen for one frame.
    fn ui(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui_controls(ui);
            ui.add_space(16.0);
            self.ui_canvas(ui);
        });
    }
}

impl App for Configurator {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use tree_core::color::Color;

    fn run_frame(ctx: &egui::Context, app: &mut Configurator) {
        run_frame_with(ctx, app, Vec::new());
    }

    fn run_frame_with(ctx: &egui::Context, app: &mut Configurator, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.ui(ctx));
    }

    /// Presses and releases the primary button at `pos`, one frame each.
    fn click_at(ctx: &egui::Context, app: &mut Configurator, pos: egui::Pos2) {
        let button = |pressed| egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed,
            modifiers: egui::Modifiers::default(),
        };
        run_frame_with(ctx, app, vec![egui::Event::PointerMoved(pos), button(true)]);
        run_frame_with(ctx, app, vec![button(false)]);
    }

    /// Interaction rects laid out by the last frame, in layout order.
    fn widget_rects(ctx: &egui::Context, keep: fn(egui::Sense) -> bool) -> Vec<egui::Rect> {
        ctx.viewport(|vp| {
            vp.prev_pass
                .widgets
                .get_layer(egui::LayerId::background())
                .filter(|w| keep(w.sense))
                .map(|w| w.interact_rect)
                .collect()
        })
    }

    // Buttons only sense clicks; sliders only sense drags. Selectable
    // labels sense both and are skipped.
    fn button_rects(ctx: &egui::Context) -> Vec<egui::Rect> {
        widget_rects(ctx, |s| s.senses_click() && !s.senses_drag())
    }

    fn slider_rects(ctx: &egui::Context) -> Vec<egui::Rect> {
        widget_rects(ctx, |s| s.senses_drag() && !s.senses_click())
    }

    #[test]
    fn labels_truncate_like_the_sliders_display() {
        assert_eq!(tree_scale_label(1.0), "Tree size: 100 %");
        assert_eq!(tree_scale_label(2.345), "Tree size: 234 %");
        assert_eq!(tree_scale_label(5.0), "Tree size: 500 %");
        assert_eq!(ornament_size_label(10.0), "Ornament size: 10 cm");
        assert_eq!(ornament_size_label(29.9), "Ornament size: 29 cm");
    }

    #[test]
    fn starts_with_default_parameters_and_a_stale_binding() {
        let ctx = egui::Context::default();
        let app = Configurator::new(&ctx);

        let p = app.store.snapshot();
        assert_eq!(p.tree_scale, 1.0);
        assert_eq!(p.ornament_size, 10.0);
        assert_eq!(p.ornament_color, Color::RED);
        assert_eq!(p.light_color, Color::YELLOW);
        assert!(app.binding.is_stale());
    }

    #[test]
    fn store_mutation_marks_binding_stale() {
        let ctx = egui::Context::default();
        let mut app = Configurator::new(&ctx);
        run_frame(&ctx, &mut app);
        assert!(!app.binding.is_stale());

        let mut rng = StdRng::seed_from_u64(11);
        app.store.randomize_ornament_color(&mut rng);

        assert!(app.binding.is_stale());
    }

    #[test]
    fn frames_render_once_until_parameters_change() {
        let ctx = egui::Context::default();
        let mut app = Configurator::new(&ctx);

        run_frame(&ctx, &mut app);
        let after_first = app.binding.render_count();
        run_frame(&ctx, &mut app);
        assert_eq!(app.binding.render_count(), after_first);

        app.store.set_tree_scale(4.0);
        app.store.set_ornament_size(20.0);
        run_frame(&ctx, &mut app);
        assert_eq!(app.binding.render_count(), after_first + 1);
    }

    #[test]
    fn idle_frames_do_not_touch_out_of_range_default() {
        let ctx = egui::Context::default();
        let mut app = Configurator::new(&ctx);

        run_frame(&ctx, &mut app);
        run_frame(&ctx, &mut app);

        assert_eq!(app.store.snapshot().tree_scale, 1.0);
        assert_eq!(app.store.revision(), 0);
    }

    #[test]
    fn ornament_button_randomizes_only_the_ornament_color() {
        let ctx = egui::Context::default();
        let mut app = Configurator::new(&ctx);
        run_frame(&ctx, &mut app);
        let before = app.store.snapshot();

        let buttons = button_rects(&ctx);
        assert_eq!(buttons.len(), 2, "expected the two color buttons");
        click_at(&ctx, &mut app, buttons[0].center());

        let after = app.store.snapshot();
        assert_eq!(app.store.revision(), 1);
        assert_eq!(after.light_color, before.light_color);
        assert_eq!(after.tree_color, before.tree_color);
        assert_eq!(after.tree_scale, before.tree_scale);
        assert_eq!(after.ornament_size, before.ornament_size);
        assert_eq!(after.ornament_color.a, 1.0);
    }

    #[test]
    fn light_button_randomizes_only_the_light_color() {
        let ctx = egui::Context::default();
        let mut app = Configurator::new(&ctx);
        run_frame(&ctx, &mut app);
        let before = app.store.snapshot();

        let buttons = button_rects(&ctx);
        click_at(&ctx, &mut app, buttons[1].center());

        let after = app.store.snapshot();
        assert_eq!(app.store.revision(), 1);
        assert_eq!(after.ornament_color, before.ornament_color);
        assert_eq!(after.tree_scale, before.tree_scale);
        assert_eq!(after.ornament_size, before.ornament_size);
        assert_eq!(after.light_color.a, 1.0);
    }

    #[test]
    fn pressing_the_tree_slider_sets_an_in_range_scale() {
        let ctx = egui::Context::default();
        let mut app = Configurator::new(&ctx);
        run_frame(&ctx, &mut app);

        let sliders = slider_rects(&ctx);
        assert_eq!(sliders.len(), 2, "expected the two sliders");
        click_at(&ctx, &mut app, sliders[0].center());

        let after = app.store.snapshot();
        assert!(app.store.revision() >= 1);
        assert!(
            app.cfg.tree_scale.as_inclusive().contains(&after.tree_scale),
            "tree scale {} outside the slider range",
            after.tree_scale
        );
        assert_eq!(after.ornament_size, 10.0);
        assert_eq!(after.ornament_color, Color::RED);
    }
}
