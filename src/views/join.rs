use crate::remote::ApiError;

/// One independent fetch in a concurrent join.
pub type Fetch<'a, T> = Box<dyn FnOnce() -> Result<T, ApiError> + Send + 'a>;

/// Runs every fetch concurrently and waits for all of them.
///
/// A fetch that fails contributes `T::default()`; the others are unaffected.
/// Results come back in input order.
pub fn join_or_default<'a, T>(fetches: Vec<(&'static str, Fetch<'a, T>)>) -> Vec<T>
where
    T: Default + Send + 'a,
{
    std::thread::scope(|scope| {
        let handles: Vec<_> = fetches
            .into_iter()
            .map(|(label, fetch)| (label, scope.spawn(fetch)))
            .collect();

        handles
            .into_iter()
            .map(|(label, handle)| match handle.join() {
                Ok(Ok(value)) => value,
                Ok(Err(err)) => {
                    tracing::warn!(fetch = label, error = %err, "fetch failed; using empty result");
                    T::default()
                }
                Err(_) => {
                    tracing::warn!(fetch = label, "fetch panicked; using empty result");
                    T::default()
                }
            })
            .collect()
    })
}

#[cfg(test)]
#[path = "../tests/views/join_tests.rs"]
mod tests;
