//! The host session: owner of the current status.

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::{HostRef, HostSurface, OverlayHost};
use crate::responder::StatusResponder;
use crate::status::Status;

/// Owns the single current [`Status`] of an overlay and forwards every
/// change to a [`StatusResponder`].
///
/// The host is marked active as soon as a non-idle status is requested and
/// inactive once a hide transition finishes, so layout changes made in
/// between are deferred by the responder.
pub struct StatusSession {
    status: Status,
    host: Rc<RefCell<OverlayHost>>,
    responder: Rc<dyn StatusResponder>,
}

impl StatusSession {
    pub fn new(host: Rc<RefCell<OverlayHost>>, responder: Rc<dyn StatusResponder>) -> Self {
        Self {
            status: Status::Idle,
            host,
            responder,
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn host(&self) -> &Rc<RefCell<OverlayHost>> {
        &self.host
    }

    pub fn is_active(&self) -> bool {
        self.host.borrow().is_active()
    }

    /// Move to `to`. Requesting the current status again does nothing.
    pub fn change_status(&mut self, to: Status) {
        if to == self.status {
            return;
        }
        let from = std::mem::replace(&mut self.status, to.clone());

        if !to.is_idle() {
            self.host.borrow_mut().set_active(true);
        }

        let finished: Box<dyn FnOnce()> = if to.is_idle() {
            let host = Rc::downgrade(&self.host);
            Box::new(move || {
                if let Some(host) = host.upgrade() {
                    host.borrow_mut().set_active(false);
                }
            })
        } else {
            Box::new(|| {})
        };

        let host: HostRef = self.host.clone();
        self.responder.change_status(&from, &to, &host, finished);
    }

    pub fn show_loading(&mut self, message: impl Into<Option<String>>) {
        self.change_status(Status::loading(message));
    }

    pub fn show_progress(&mut self, message: impl Into<Option<String>>, value: f32) {
        self.change_status(Status::progress(message, value));
    }

    pub fn show_success(&mut self, message: impl Into<Option<String>>) {
        self.change_status(Status::success(message));
    }

    pub fn show_failure(&mut self, message: impl Into<Option<String>>) {
        self.change_status(Status::failure(message));
    }

    pub fn show_custom(&mut self, name: impl Into<String>, message: impl Into<Option<String>>) {
        self.change_status(Status::custom(name, message));
    }

    pub fn hide(&mut self) {
        self.change_status(Status::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(String, String)>>,
        pending: RefCell<Vec<Box<dyn FnOnce()>>>,
    }

    impl StatusResponder for Recorder {
        fn change_status(
            &self,
            from: &Status,
            to: &Status,
            _host: &HostRef,
            finished: Box<dyn FnOnce()>,
        ) {
            self.calls
                .borrow_mut()
                .push((from.kind().to_string(), to.kind().to_string()));
            self.pending.borrow_mut().push(finished);
        }
    }

    impl Recorder {
        fn finish_all(&self) {
            let pending = std::mem::take(&mut *self.pending.borrow_mut());
            for f in pending {
                f();
            }
        }
    }

    fn session() -> (StatusSession, Rc<Recorder>) {
        let host = OverlayHost::new(Rect::new(0.0, 0.0, 200.0, 200.0)).into_shared();
        let recorder = Rc::new(Recorder::default());
        (StatusSession::new(host, recorder.clone()), recorder)
    }

    #[test]
    fn test_forwards_from_and_to() {
        let (mut session, recorder) = session();
        session.show_loading(None);
        session.show_success(Some("Done".to_string()));
        session.show_failure(Some("Offline".to_string()));
        session.hide();
        assert_eq!(
            *recorder.calls.borrow(),
            vec![
                ("idle".to_string(), "loading".to_string()),
                ("loading".to_string(), "success".to_string()),
                ("success".to_string(), "failure".to_string()),
                ("failure".to_string(), "idle".to_string()),
            ]
        );
        assert!(session.status().is_idle());
    }

    #[test]
    fn test_same_status_is_ignored() {
        let (mut session, recorder) = session();
        session.show_loading(None);
        session.show_loading(None);
        assert_eq!(recorder.calls.borrow().len(), 1);
    }

    #[test]
    fn test_active_until_hide_finishes() {
        let (mut session, recorder) = session();
        session.show_custom("sync", None);
        assert!(session.is_active());

        session.hide();
        assert!(session.is_active());

        recorder.finish_all();
        assert!(!session.is_active());
    }

    #[test]
    fn test_show_finished_keeps_host_active() {
        let (mut session, recorder) = session();
        session.show_progress(None, 0.5);
        recorder.finish_all();
        assert!(session.is_active());
    }
}
