use crate::bootstrap::{ContextFactory, FrameTarget, WINDOW_SPEC};
use crate::error::{FrameError, ViewerError};
use crate::session::{Session, ViewerConfig};
use crate::status::ExitStatus;
use cubeview_input::{CameraChange, KeyEvent};

/// Top-level loop controller. Owns the session and, once resumed, the context.
pub struct Viewer<F: ContextFactory> {
    context: Option<F::Context>,
    factory: F,
    session: Session,
    failed: bool,
    frames: u64,
}

impl<F: ContextFactory> Viewer<F> {
    pub fn new(factory: F, config: ViewerConfig) -> Self {
        Self {
            context: None,
            factory,
            session: Session::new(config, &WINDOW_SPEC),
            failed: false,
            frames: 0,
        }
    }

    /// Create the window and context if not already done.
    ///
    /// On failure the viewer is marked failed and the caller should exit
    /// the event loop.
    pub fn resume(&mut self, target: &F::Target) -> Result<(), ViewerError> {
        if self.context.is_some() {
            return Ok(());
        }
        let variant = self.session.config().variant;
        match self.factory.create(target, &WINDOW_SPEC, variant) {
            Ok(context) => {
                tracing::info!("{}", context.describe());
                tracing::info!(
                    variant = %variant,
                    "{} {}x{} ready",
                    WINDOW_SPEC.title,
                    WINDOW_SPEC.width,
                    WINDOW_SPEC.height
                );
                context.request_redraw();
                self.context = Some(context);
                Ok(())
            }
            Err(e) => {
                tracing::error!("failed to create graphics context: {e}");
                self.failed = true;
                Err(e.into())
            }
        }
    }

    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<CameraChange> {
        self.session.handle_key(event)
    }

    /// Draw a frame at the current wall-clock time.
    pub fn redraw(&mut self) -> Result<(), FrameError> {
        let elapsed = self.session.elapsed();
        self.redraw_at(elapsed)
    }

    /// Draw a frame as if `elapsed` seconds had passed since start.
    pub fn redraw_at(&mut self, elapsed: f32) -> Result<(), FrameError> {
        let context = self.context.as_mut().ok_or(FrameError::NoContext)?;
        let uniforms = self.session.uniforms_at(elapsed);
        let result = context.draw(&uniforms);
        context.request_redraw();
        result?;
        self.frames += 1;
        Ok(())
    }

    /// Release the context. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(context) = self.context.take() {
            tracing::debug!(frames = self.frames, "releasing graphics context");
            drop(context);
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.failed {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn context(&self) -> Option<&F::Context> {
        self.context.as_ref()
    }

    pub fn context_mut(&mut self) -> Option<&mut F::Context> {
        self.context.as_mut()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames
    }
}

impl<F: ContextFactory> Drop for Viewer<F> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::WindowSpec;
    use crate::error::BootstrapError;
    use cubeview_input::{ArrowKey, Modifiers};
    use cubeview_render::{FrameUniforms, Variant};
    use glam::Mat4;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakeContext {
        drawn: Vec<FrameUniforms>,
        fail_next: bool,
        redraw_requests: Rc<Cell<u32>>,
    }

    impl FrameTarget for FakeContext {
        fn describe(&self) -> String {
            "fake backend".into()
        }

        fn draw(&mut self, uniforms: &FrameUniforms) -> Result<(), FrameError> {
            if std::mem::take(&mut self.fail_next) {
                return Err(FrameError::Surface("timeout".into()));
            }
            self.drawn.push(*uniforms);
            Ok(())
        }

        fn request_redraw(&self) {
            self.redraw_requests.set(self.redraw_requests.get() + 1);
        }
    }

    #[derive(Default)]
    struct FakeFactory {
        fail: bool,
        created: u32,
        last_spec: Option<WindowSpec>,
        redraw_requests: Rc<Cell<u32>>,
    }

    impl ContextFactory for FakeFactory {
        type Target = ();
        type Context = FakeContext;

        fn create(
            &mut self,
            _target: &(),
            spec: &WindowSpec,
            _variant: Variant,
        ) -> Result<FakeContext, BootstrapError> {
            self.last_spec = Some(*spec);
            if self.fail {
                return Err(BootstrapError::Window("injected failure".into()));
            }
            self.created += 1;
            Ok(FakeContext {
                redraw_requests: self.redraw_requests.clone(),
                ..FakeContext::default()
            })
        }
    }

    fn look_at() -> ViewerConfig {
        ViewerConfig {
            variant: Variant::LookAt,
            ..ViewerConfig::default()
        }
    }

    #[test]
    fn creation_failure_exits_with_failure() {
        let factory = FakeFactory {
            fail: true,
            ..FakeFactory::default()
        };
        let mut viewer = Viewer::new(factory, look_at());
        let err = viewer.resume(&()).unwrap_err();
        assert!(matches!(err, ViewerError::Bootstrap(BootstrapError::Window(_))));
        assert!(viewer.context().is_none());
        assert_eq!(viewer.exit_status(), ExitStatus::Failure);
    }

    #[test]
    fn normal_run_exits_with_success() {
        let mut viewer = Viewer::new(FakeFactory::default(), look_at());
        viewer.resume(&()).unwrap();
        viewer.redraw_at(0.0).unwrap();
        viewer.shutdown();
        assert!(viewer.context().is_none());
        assert_eq!(viewer.exit_status(), ExitStatus::Success);
    }

    #[test]
    fn factory_gets_fixed_window() {
        let mut viewer = Viewer::new(FakeFactory::default(), look_at());
        viewer.resume(&()).unwrap();
        assert_eq!(viewer.factory.last_spec, Some(WINDOW_SPEC));
    }

    #[test]
    fn resume_is_idempotent() {
        let mut viewer = Viewer::new(FakeFactory::default(), look_at());
        viewer.resume(&()).unwrap();
        viewer.resume(&()).unwrap();
        assert_eq!(viewer.factory.created, 1);
    }

    #[test]
    fn redraw_before_resume_has_no_context() {
        let mut viewer = Viewer::new(FakeFactory::default(), look_at());
        assert!(matches!(viewer.redraw(), Err(FrameError::NoContext)));
        assert_eq!(viewer.frames_drawn(), 0);
    }

    #[test]
    fn keys_between_frames_change_the_next_view() {
        let mut viewer = Viewer::new(FakeFactory::default(), look_at());
        viewer.resume(&()).unwrap();
        viewer.redraw_at(0.0).unwrap();
        viewer.handle_key(&KeyEvent::pressed(ArrowKey::Left, Modifiers::SHIFT));
        viewer.redraw_at(0.0).unwrap();

        let drawn = &viewer.context().unwrap().drawn;
        assert_eq!(drawn.len(), 2);
        assert_ne!(drawn[0].view, drawn[1].view);
        assert_eq!(drawn[1].view, viewer.session().camera().view_matrix());
    }

    #[test]
    fn spin_animates_model_only() {
        let config = ViewerConfig {
            variant: Variant::Spin,
            ..ViewerConfig::default()
        };
        let mut viewer = Viewer::new(FakeFactory::default(), config);
        viewer.resume(&()).unwrap();
        viewer.redraw_at(0.0).unwrap();
        viewer.redraw_at(1.0).unwrap();

        let drawn = &viewer.context().unwrap().drawn;
        assert_ne!(drawn[0].model, drawn[1].model);
        assert!(drawn.iter().all(|u| u.view == Mat4::IDENTITY));
        assert!(drawn.iter().all(|u| u.projection == Mat4::IDENTITY));
    }

    #[test]
    fn frame_error_is_not_fatal() {
        let mut viewer = Viewer::new(FakeFactory::default(), look_at());
        viewer.resume(&()).unwrap();
        viewer.context.as_mut().unwrap().fail_next = true;
        assert!(matches!(viewer.redraw_at(0.0), Err(FrameError::Surface(_))));
        viewer.redraw_at(0.1).unwrap();
        assert_eq!(viewer.frames_drawn(), 1);
        assert_eq!(viewer.exit_status(), ExitStatus::Success);
    }

    #[test]
    fn every_frame_requests_the_next() {
        let factory = FakeFactory::default();
        let requests = factory.redraw_requests.clone();
        let mut viewer = Viewer::new(factory, look_at());
        viewer.resume(&()).unwrap();
        viewer.redraw_at(0.0).unwrap();
        viewer.redraw_at(0.1).unwrap();
        // One from resume, one per frame.
        assert_eq!(requests.get(), 3);
    }
}
