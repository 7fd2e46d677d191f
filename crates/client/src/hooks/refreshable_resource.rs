use std::{future::Future, marker::PhantomData};

use dioxus::{
    hooks::{use_context, use_context_provider, use_resource, Resource},
    signals::{ReadableExt, Signal},
};

/// A hook that wraps `use_resource` and adds a signal to the context that can be used to refresh the resource.
///
/// You can access the signal using `use_refresh_resource::<T>()`.
///
/// ### Example
///
/// ```rust,ignore
/// // In a view. Can be used just like `use_resource`.
/// let logs: Resource<Vec<WorkHourLog>> = use_refreshable_resource(|| async {
///     // Fetch the work hour logs
/// });
///
/// // Now in a child component, you can trigger a refresh of the resource.
/// // The `T` here is the same as the `T` in `logs: Resource<T>` above.
/// let refresh: Signal<()> = use_refresh_resource::<Vec<WorkHourLog>>();
///
/// rsx! {
///     // Pressing this button re-runs the fetch above.
///     button { onclick: move |_| refresh.write(), "Refresh" }
/// }
/// ```
pub fn use_refreshable_resource<T, F>(mut future: impl FnMut() -> F + 'static) -> Resource<T>
where
    T: 'static,
    F: Future<Output = T> + 'static,
{
    let context =
        use_context_provider::<(Signal<()>, PhantomData<T>)>(|| (Signal::new(()), PhantomData));
    use_resource(move || {
        context.0.read();
        future()
    })
}

/// See `use_refreshable_resource`.
pub fn use_refresh_resource<T>() -> Signal<()>
where
    T: 'static + Clone,
{
    let context = use_context::<(Signal<()>, PhantomData<T>)>();
    context.0
}
