use std::time::Duration;

use eframe::egui;
use egg_core::{
    egg::{EggShape, FINISHED_BUTTON_RGB},
    TickReceiver, Ticker, TickerConfig, TimerPhase, TimerState,
};

use crate::controller::events::{apply_action, sync_duration_field, UiAction};
use crate::controller::orchestration::drain_ticks;
use crate::ui::egg::EggPainter;

const DURATION_HINT: &str = "Boil duration (seconds)";
const BUTTON_HEIGHT: f32 = 40.0;

pub struct EggTimerApp {
    timer: TimerState,
    duration_input: String,
    tick_rx: TickReceiver,
    ticker: Ticker,
    tick_period: Duration,
    ticker_lost_reported: bool,
    egg: EggPainter,
}

impl EggTimerApp {
    pub fn new(ticker: Ticker, tick_rx: TickReceiver, ticker_config: TickerConfig) -> Self {
        Self {
            timer: TimerState::new(),
            duration_input: String::new(),
            tick_rx,
            ticker,
            tick_period: ticker_config.period(),
            ticker_lost_reported: false,
            egg: EggPainter::new(EggShape::default()),
        }
    }

    fn check_ticker(&mut self) {
        if self.ticker.is_finished() && !self.ticker_lost_reported {
            tracing::error!("progress ticker thread stopped; the timer will no longer advance");
            self.ticker_lost_reported = true;
        }
    }

    fn show_controls(&mut self, ctx: &egui::Context) -> Option<UiAction> {
        let mut action = None;
        let phase = self.timer.phase();

        egui::TopBottomPanel::bottom("timer_controls")
            .show_separator_line(false)
            .frame(egui::Frame::NONE.fill(ctx.style().visuals.panel_fill))
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .inner_margin(egui::Margin {
                        left: 10,
                        right: 10,
                        top: 0,
                        bottom: 30,
                    })
                    .show(ui, |ui| {
                        let edit = egui::TextEdit::singleline(&mut self.duration_input)
                            .id_salt("boil_duration")
                            .hint_text(DURATION_HINT)
                            .horizontal_align(egui::Align::Center)
                            .font(egui::TextStyle::Heading)
                            .interactive(phase == TimerPhase::Idle)
                            .desired_width(f32::INFINITY);
                        let response = ui.add(edit);
                        let submitted =
                            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        if submitted {
                            action = Some(UiAction::DurationSubmitted);
                        }
                    });

                let bar_width = ui.available_width();
                ui.add(egui::ProgressBar::new(self.timer.progress()).desired_width(bar_width));

                egui::Frame::NONE
                    .inner_margin(egui::Margin::same(25))
                    .show(ui, |ui| {
                        let mut button = egui::Button::new(
                            egui::RichText::new(phase.button_label()).strong(),
                        )
                        .min_size(egui::vec2(ui.available_width(), BUTTON_HEIGHT));
                        if phase == TimerPhase::Finished {
                            let [r, g, b] = FINISHED_BUTTON_RGB;
                            button = button.fill(egui::Color32::from_rgb(r, g, b));
                        }
                        if ui.add(button).clicked() {
                            action = Some(UiAction::StartStopPressed);
                        }
                    });
            });

        action
    }
}

impl eframe::App for EggTimerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_ticker();
        drain_ticks(&self.tick_rx, &mut self.timer);
        sync_duration_field(&self.timer, &mut self.duration_input);

        if let Some(action) = self.show_controls(ctx) {
            apply_action(action, &mut self.timer, &mut self.duration_input);
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.egg.paint(ui, self.timer.progress());
        });

        if self.timer.phase() == TimerPhase::Running {
            ctx.request_repaint_after(self.tick_period);
        }
    }
}
