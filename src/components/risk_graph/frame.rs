/// Animation-frame callback plus the id of the frame it last requested.
///
/// The callback re-requests itself through a shared handle to this struct, so
/// it keeps the struct alive; [`FrameLoop::stop`] hands it back to break that
/// cycle when the canvas goes away.
pub struct FrameLoop<F> {
	callback: Option<F>,
	pending: Option<i32>,
}

impl<F> Default for FrameLoop<F> {
	fn default() -> Self {
		Self {
			callback: None,
			pending: None,
		}
	}
}

impl<F> FrameLoop<F> {
	pub fn is_running(&self) -> bool {
		self.callback.is_some()
	}

	/// Requests the first frame; `callback` is kept only if the request succeeds.
	pub fn launch<E>(
		&mut self,
		callback: F,
		request: impl FnOnce(&F) -> Result<i32, E>,
	) -> Result<(), E> {
		let id = request(&callback)?;
		self.callback = Some(callback);
		self.pending = Some(id);
		Ok(())
	}

	/// Requests the next frame. Does nothing once stopped.
	pub fn schedule<E>(&mut self, request: impl FnOnce(&F) -> Result<i32, E>) -> Result<(), E> {
		self.pending = None;
		if let Some(cb) = &self.callback {
			self.pending = Some(request(cb)?);
		}
		Ok(())
	}

	/// Stops the loop, returning the callback and the frame still pending, if any.
	pub fn stop(&mut self) -> (Option<F>, Option<i32>) {
		(self.callback.take(), self.pending.take())
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;

	type Shared = Rc<RefCell<FrameLoop<Box<dyn Fn()>>>>;

	#[test]
	fn failed_first_request_leaves_the_loop_stopped() {
		let mut frames: FrameLoop<Box<dyn Fn()>> = FrameLoop::default();
		let result = frames.launch(Box::new(|| {}), |_| Err("no window"));
		assert_eq!(result, Err("no window"));
		assert!(!frames.is_running());
		assert_eq!(frames.stop().1, None);

		frames.launch(Box::new(|| {}), |_| Ok::<_, ()>(3)).expect("launch");
		assert!(frames.is_running());
	}

	#[test]
	fn schedule_tracks_the_pending_frame() {
		let mut frames: FrameLoop<Box<dyn Fn()>> = FrameLoop::default();
		frames.launch(Box::new(|| {}), |_| Ok::<_, ()>(1)).expect("launch");
		frames.schedule(|_| Ok::<_, ()>(2)).expect("schedule");
		assert_eq!(frames.pending, Some(2));
		assert_eq!(frames.schedule(|_| Err("throttled")), Err("throttled"));
		assert_eq!(frames.pending, None);

		let (callback, pending) = frames.stop();
		assert!(callback.is_some());
		assert_eq!(pending, None);
		frames.schedule(|_| Ok::<_, ()>(9)).expect("schedule");
		assert_eq!(frames.pending, None);
	}

	#[test]
	fn stop_releases_a_self_referencing_callback() {
		let frames: Shared = Rc::new(RefCell::new(FrameLoop::default()));
		let inner = frames.clone();
		frames
			.borrow_mut()
			.launch(
				Box::new(move || {
					let _ = inner.borrow().is_running();
				}),
				|_| Ok::<_, ()>(7),
			)
			.expect("launch");
		assert_eq!(Rc::strong_count(&frames), 2);

		let (callback, pending) = frames.borrow_mut().stop();
		assert_eq!(pending, Some(7));
		drop(callback);
		assert_eq!(Rc::strong_count(&frames), 1);
		assert!(!frames.borrow().is_running());
	}
}
