// src/animation.rs

use std::time::{Duration, Instant};

use crate::eval::FunctionEvaluator;
use crate::info_panel::{self, StepInfo};
use crate::iterations::{IterationRecord, IterationSequence, PlotDataset, StepAux};
use crate::method::MethodVariant;
use crate::plot_surface::PlotSurfaceAdapter;
use crate::traces;

const DEFAULT_SPEED_MS: u64 = 1000;

/// Timer langkah kooperatif: satu-satunya sumber tick animasi.
///
/// Tidak ada thread; pemilik memanggil [`AnimationController::poll`] di batas
/// frame dan timer menyatakan tick mana yang sudah jatuh tempo. Membatalkan
/// berarti menjatuhkan handle ini, jadi pembatalan selalu sinkron.
#[derive(Debug, Clone, Copy)]
struct StepTimer {
    interval: Duration,
    next_tick: Instant,
}

impl StepTimer {
    fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_tick: now + interval,
        }
    }

    fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    fn advance(&mut self) {
        self.next_tick += self.interval;
    }

    fn reschedule(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.next_tick = now + interval;
    }

    fn remaining(&self, now: Instant) -> Duration {
        self.next_tick.saturating_duration_since(now)
    }
}

/// State playback. Invarian: `current_step <= total`, dan `timer` ada
/// jika dan hanya jika `is_playing`.
struct AnimationState {
    current_step: usize,
    is_playing: bool,
    speed_ms: u64,
    timer: Option<StepTimer>,
}

impl AnimationState {
    fn new() -> Self {
        Self {
            current_step: 0,
            is_playing: false,
            speed_ms: DEFAULT_SPEED_MS,
            timer: None,
        }
    }
}

/// Snapshot baca-saja untuk host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSnapshot {
    pub is_playing: bool,
    pub current_step: usize,
    pub total_steps: usize,
    pub speed_ms: u64,
}

/// Mesin playback animasi iterasi.
///
/// Satu-satunya pemilik dan pengubah state animasi serta daftar trace di
/// [`PlotSurfaceAdapter`]. Generator trace dan perender panel info murni,
/// jadi tidak perlu disiplin locking apa pun di luar kepemilikan tunggal ini.
/// Tidak ada error yang naik ke host: input jelek menurunkan kelengkapan
/// visual satu langkah saja.
pub struct AnimationController {
    plot: Option<PlotDataset>,
    sequence: IterationSequence,
    variant: MethodVariant,
    state: AnimationState,
    surface: PlotSurfaceAdapter,
    evaluator: Box<dyn FunctionEvaluator>,
    current_info: Option<StepInfo>,
}

impl AnimationController {
    pub fn new(evaluator: Box<dyn FunctionEvaluator>) -> Self {
        let mut surface = PlotSurfaceAdapter::new();
        surface.init_empty();
        Self {
            plot: None,
            sequence: IterationSequence::default(),
            variant: MethodVariant::Bisection,
            state: AnimationState::new(),
            surface,
            evaluator,
            current_info: None,
        }
    }

    /// Ganti seluruh data urutan dan gambar ulang plot dasar.
    ///
    /// Urutan iterasi kosong adalah no-op (bukan error): data lama tetap
    /// berlaku. `aux` disejajarkan per posisi dengan `records`; entri yang
    /// kurang dianggap `None`.
    pub fn load_data(
        &mut self,
        plot: PlotDataset,
        records: Vec<IterationRecord>,
        aux: Vec<Option<StepAux>>,
        variant: MethodVariant,
    ) {
        if records.is_empty() {
            eprintln!("[animation] load_data dengan urutan iterasi kosong, diabaikan");
            return;
        }

        self.pause();
        self.sequence = IterationSequence::from_parts(records, aux);
        self.variant = variant;
        self.state.current_step = 0;
        self.current_info = None;
        self.surface.draw_base(&plot, variant);
        self.plot = Some(plot);
    }

    /// Mulai playback, atau pause kalau sedang berjalan (toggle). Kalau kursor
    /// sudah di ujung, mulai lagi dari langkah 0. Tidak pernah ada dua timer:
    /// cabang toggle ini yang menegakkan invarian satu-timer.
    pub fn play(&mut self) {
        if self.state.is_playing {
            self.pause();
            return;
        }
        if self.sequence.is_empty() {
            return;
        }
        if self.state.current_step >= self.sequence.len() {
            self.state.current_step = 0;
        }
        self.state.is_playing = true;
        self.state.timer = Some(StepTimer::new(
            Duration::from_millis(self.state.speed_ms),
            Instant::now(),
        ));
    }

    /// Batalkan timer kalau ada. Idempoten; saat tidak sedang playback tidak
    /// ada efek apa pun.
    pub fn pause(&mut self) {
        self.state.timer = None;
        self.state.is_playing = false;
    }

    /// Render langkah pada kursor lalu maju satu. No-op di ujung urutan.
    pub fn step_forward(&mut self) {
        if self.state.is_playing {
            self.pause();
        }
        if self.state.current_step < self.sequence.len() {
            self.render_step(self.state.current_step);
            self.state.current_step += 1;
        }
    }

    /// Mundur satu langkah lalu render langkah pada kursor baru. No-op di 0.
    pub fn step_backward(&mut self) {
        if self.state.is_playing {
            self.pause();
        }
        if self.state.current_step > 0 {
            self.state.current_step -= 1;
            self.render_step(self.state.current_step);
        }
    }

    /// Kembali ke langkah 0 dan gambar ulang plot dasar tanpa overlay.
    pub fn reset(&mut self) {
        self.pause();
        self.state.current_step = 0;
        self.current_info = None;
        match &self.plot {
            Some(plot) => self.surface.draw_base(plot, self.variant),
            None => self.surface.init_empty(),
        }
    }

    /// Ubah kecepatan playback. Saat playback berjalan, timer dijadwal ulang
    /// dengan interval baru tanpa menggeser kursor dan tanpa render tambahan.
    pub fn set_speed(&mut self, ms: u64) {
        if ms == 0 {
            eprintln!("[animation] set_speed(0) diabaikan, interval harus positif");
            return;
        }
        self.state.speed_ms = ms;
        if let Some(timer) = self.state.timer.as_mut() {
            timer.reschedule(Duration::from_millis(ms), Instant::now());
        }
    }

    pub fn state(&self) -> AnimationSnapshot {
        AnimationSnapshot {
            is_playing: self.state.is_playing,
            current_step: self.state.current_step,
            total_steps: self.sequence.len(),
            speed_ms: self.state.speed_ms,
        }
    }

    /// Jalankan semua tick yang sudah jatuh tempo pada `now`. Setiap tick
    /// merender langkah pada kursor lalu memajukannya; begitu kursor mencapai
    /// ujung, timer berhenti tanpa efek samping lain.
    ///
    /// Mengembalikan sisa waktu sampai tick berikutnya selama playback masih
    /// berjalan, supaya host bisa menjadwalkan repaint.
    pub fn poll(&mut self, now: Instant) -> Option<Duration> {
        while self.state.is_playing {
            match self.state.timer {
                Some(timer) if timer.is_due(now) => {
                    self.tick();
                    if let Some(timer) = self.state.timer.as_mut() {
                        timer.advance();
                    }
                }
                _ => break,
            }
        }
        self.state.timer.as_ref().map(|t| t.remaining(now))
    }

    fn tick(&mut self) {
        self.render_step(self.state.current_step);
        self.state.current_step += 1;
        if self.state.current_step >= self.sequence.len() {
            self.state.timer = None;
            self.state.is_playing = false;
        }
    }

    fn render_step(&mut self, index: usize) {
        let Some(plot) = self.plot.as_ref() else {
            return;
        };
        let Some(step) = self.sequence.get(index) else {
            return;
        };

        let overlays = traces::generate_method_traces(
            &step.record,
            step.aux.as_ref(),
            index,
            self.variant,
            plot,
            self.evaluator.as_ref(),
        );
        self.surface.apply_overlays(overlays);
        self.current_info = Some(info_panel::describe_step(
            &step.record,
            index,
            self.sequence.len(),
            self.variant,
        ));
    }

    pub fn surface(&self) -> &PlotSurfaceAdapter {
        &self.surface
    }

    pub fn current_info(&self) -> Option<&StepInfo> {
        self.current_info.as_ref()
    }

    pub fn sequence(&self) -> &IterationSequence {
        &self.sequence
    }

    pub fn variant(&self) -> MethodVariant {
        self.variant
    }

    pub fn has_data(&self) -> bool {
        !self.sequence.is_empty()
    }
}
