use std::future::Future;

use dioxus::prelude::*;
use sprofile_common::MountGuard;

use crate::api::ApiHandle;

/// Run `load` once when the component mounts and keep its result in a signal.
///
/// A result that arrives after unmount is dropped instead of written.
pub fn use_mounted_fetch<S, F, Fut>(initial: impl FnOnce() -> S, load: F) -> Signal<S>
where
    S: 'static,
    F: FnOnce(ApiHandle) -> Fut + 'static,
    Fut: Future<Output = S> + 'static,
{
    let api = use_context::<ApiHandle>();
    let guard = use_hook(MountGuard::new);
    let mut state = use_signal(initial);

    use_hook({
        let guard = guard.clone();
        move || {
            spawn(async move {
                let value = load(api).await;
                guard.apply_if_mounted(value, |value| state.set(value));
            });
        }
    });

    use_drop(move || guard.release());

    state
}
