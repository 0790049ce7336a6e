use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::anim::{AnimatorConfig, ConfigError, GradientAnimator};
use crate::surface::SurfaceTargets;

use super::scheduler::FrameScheduler;

/// Why a loop returned.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopExit {
    /// Neither surface was present; nothing ran.
    NoTargets,
    /// A [`StopHandle`] requested the stop.
    Stopped,
    /// The scheduler reported the host gone.
    HostClosed,
}

/// Cloneable, thread-safe request to end a running loop.
///
/// The flag is checked before each frame is requested and again once the
/// scheduler delivers it. No frame is applied after `stop` returns, even when
/// the stop lands while the loop is blocked waiting for the host.
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn stop(&self) {
        self.flag.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

/// Controller owning the animator, its surfaces and the stop flag.
pub struct BackdropLoop<'a> {
    animator: GradientAnimator,
    targets: SurfaceTargets<'a>,
    stop: StopHandle,
    frames: u64,
}

impl<'a> BackdropLoop<'a> {
    pub fn new(animator: GradientAnimator, targets: SurfaceTargets<'a>) -> Self {
        Self {
            animator,
            targets,
            stop: StopHandle::default(),
            frames: 0,
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    #[inline]
    pub fn animator(&self) -> &GradientAnimator {
        &self.animator
    }

    /// Frames applied so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs until stopped or the host closes.
    ///
    /// The first frame only establishes the timestamp baseline (progress does
    /// not jump by the time spent before the loop started) and still publishes
    /// the initial composition.
    pub fn run<S: FrameScheduler>(&mut self, mut scheduler: S) -> LoopExit {
        if self.targets.is_empty() {
            log::debug!("no background surfaces present; animation not started");
            return LoopExit::NoTargets;
        }

        log::info!(
            "background animation started (hero: {}, nav: {})",
            self.targets.hero.is_some(),
            self.targets.nav.is_some()
        );

        let mut first = true;
        loop {
            if self.stop.is_stopped() {
                log::info!("background animation stopped after {} frames", self.frames);
                return LoopExit::Stopped;
            }

            let Some(now_ms) = scheduler.next_frame() else {
                log::info!("host closed after {} frames", self.frames);
                return LoopExit::HostClosed;
            };

            if self.stop.is_stopped() {
                log::info!("background animation stopped after {} frames", self.frames);
                return LoopExit::Stopped;
            }

            if first {
                self.animator.rebase(now_ms);
                first = false;
            }

            self.step(now_ms);
        }
    }

    /// Advances one frame and publishes it. Exposed for hosts that own their
    /// own frame callback instead of a [`FrameScheduler`].
    pub fn step(&mut self, now_ms: f64) {
        let out = self.animator.frame(now_ms);
        let css = out.css();
        let cfg = self.animator.config();
        self.targets.apply(&cfg.hero_property, &cfg.nav_property, &css);
        self.frames += 1;
    }
}

/// Starts the hero background animation on the given surfaces.
///
/// With both surfaces absent this is a silent no-op: the scheduler is never
/// polled and nothing is written.
pub fn start<'a, S: FrameScheduler>(
    config: AnimatorConfig,
    targets: SurfaceTargets<'a>,
    scheduler: S,
) -> Result<LoopExit, ConfigError> {
    if targets.is_empty() {
        log::debug!("no background surfaces present; animation not started");
        return Ok(LoopExit::NoTargets);
    }
    let animator = GradientAnimator::new(config, 0.0)?;
    Ok(BackdropLoop::new(animator, targets).run(scheduler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::runtime::ScriptedScheduler;
    use crate::surface::{StyleSheet, Surface};

    fn cfg() -> AnimatorConfig {
        AnimatorConfig::default().seed(99)
    }

    /// Requests a stop from inside a surface write.
    struct StopAfter {
        handle: StopHandle,
        remaining: u32,
    }

    impl Surface for StopAfter {
        fn set_property(&mut self, _: &str, _: &str) {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.handle.stop();
            }
        }
    }

    /// Requests a stop while the loop waits for the next frame.
    struct StopWhileWaiting {
        handle: StopHandle,
        inner: ScriptedScheduler,
    }

    impl FrameScheduler for StopWhileWaiting {
        fn next_frame(&mut self) -> Option<f64> {
            let frame = self.inner.next_frame();
            if self.inner.requested() == 2 {
                self.handle.stop();
            }
            frame
        }
    }

    fn hero_only(hero: &mut StyleSheet) -> SurfaceTargets<'_> {
        SurfaceTargets::new(Some(Box::new(hero)), None)
    }

    // ── start ─────────────────────────────────────────────────────────────

    #[test]
    fn no_targets_is_noop() {
        let mut sched = ScriptedScheduler::uniform(5, 16.0);
        let exit = start(cfg(), SurfaceTargets::none(), &mut sched).unwrap();
        assert_eq!(exit, LoopExit::NoTargets);
        assert_eq!(sched.requested(), 0);
    }

    #[test]
    fn both_surfaces_receive_same_value() {
        let mut hero = StyleSheet::new();
        let mut nav = StyleSheet::new();
        let exit = start(
            cfg(),
            SurfaceTargets::new(Some(Box::new(&mut hero)), Some(Box::new(&mut nav))),
            ScriptedScheduler::uniform(10, 16.0),
        )
        .unwrap();

        assert_eq!(exit, LoopExit::HostClosed);
        assert_eq!(hero.writes(), 10);
        assert_eq!(nav.writes(), 10);
        assert_eq!(hero.get("--hero-bg"), nav.get("--nav-bg"));
        assert!(hero.get("--hero-bg").unwrap().starts_with("radial-gradient("));
    }

    #[test]
    fn single_surface_is_enough() {
        let mut nav = StyleSheet::new();
        let exit = start(
            cfg(),
            SurfaceTargets::new(None, Some(Box::new(&mut nav))),
            ScriptedScheduler::uniform(3, 16.0),
        )
        .unwrap();
        assert_eq!(exit, LoopExit::HostClosed);
        assert_eq!(nav.writes(), 3);
        assert!(nav.get("--hero-bg").is_none());
    }

    #[test]
    fn first_frame_sets_baseline() {
        let mut hero = StyleSheet::new();
        let animator = GradientAnimator::new(cfg(), 0.0).unwrap();
        let initial = animator.current().to_string();
        let mut lp = BackdropLoop::new(animator, hero_only(&mut hero));

        // Host clock starts far from zero; the first frame must not jump.
        let exit = lp.run(ScriptedScheduler::new([50_000.0]));
        assert_eq!(exit, LoopExit::HostClosed);
        assert_eq!(lp.animator().progress(), 0.0);
        drop(lp);
        assert_eq!(hero.get("--hero-bg"), Some(initial.as_str()));
    }

    // ── stop ──────────────────────────────────────────────────────────────

    #[test]
    fn stop_handle_ends_loop() {
        let animator = GradientAnimator::new(cfg(), 0.0).unwrap();
        let handle = StopHandle::default();
        let surface = StopAfter {
            handle: handle.clone(),
            remaining: 4,
        };
        let targets = SurfaceTargets::new(Some(Box::new(surface)), None);
        let mut lp = BackdropLoop::new(animator, targets);
        lp.stop = handle;

        let mut sched = ScriptedScheduler::uniform(100, 16.0);
        assert_eq!(lp.run(&mut sched), LoopExit::Stopped);
        assert_eq!(lp.frames(), 4);
        assert_eq!(sched.requested(), 4);
    }

    #[test]
    fn stop_before_run_polls_nothing() {
        let mut hero = StyleSheet::new();
        let animator = GradientAnimator::new(cfg(), 0.0).unwrap();
        let mut lp = BackdropLoop::new(animator, hero_only(&mut hero));
        lp.stop_handle().stop();

        let mut sched = ScriptedScheduler::uniform(3, 16.0);
        assert_eq!(lp.run(&mut sched), LoopExit::Stopped);
        assert_eq!(sched.requested(), 0);
        drop(lp);
        assert!(hero.is_empty());
    }

    #[test]
    fn stop_during_frame_wait_applies_nothing_more() {
        let mut hero = StyleSheet::new();
        let animator = GradientAnimator::new(cfg(), 0.0).unwrap();
        let mut lp = BackdropLoop::new(animator, hero_only(&mut hero));
        let mut sched = StopWhileWaiting {
            handle: lp.stop_handle(),
            inner: ScriptedScheduler::uniform(10, 16.0),
        };

        // Frame one is applied; the stop arrives while frame two is pending.
        assert_eq!(lp.run(&mut sched), LoopExit::Stopped);
        assert_eq!(lp.frames(), 1);
        assert_eq!(sched.inner.requested(), 2);
        drop(lp);
        assert_eq!(hero.writes(), 1);
    }

    #[test]
    fn invalid_config_is_reported() {
        let mut hero = StyleSheet::new();
        let err = start(
            cfg().palette(Vec::<Color>::new()),
            hero_only(&mut hero),
            ScriptedScheduler::uniform(1, 16.0),
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::EmptyPalette);
    }
}
