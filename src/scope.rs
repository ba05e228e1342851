// Copyright 2026 GamePowerX
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Nested logging scopes.

use std::fmt;

type OnClose<T> = Box<dyn FnOnce(&T) + Send>;

/// An active logging scope returned by
/// [`FileLogger::begin_scope`](crate::FileLogger::begin_scope).
///
/// A scope owns its state value and a one-shot close notification. It is
/// exclusively owned by the caller that created it; the logger keeps no
/// reference, so disposal is caller-driven. Closing fires the notification
/// exactly once, whether through [`close`](Scope::close) or through `Drop`;
/// after that the scope is inert and further close calls are no-ops.
pub struct Scope<T> {
    state: T,
    on_close: Option<OnClose<T>>,
}

impl<T> Scope<T> {
    pub(crate) fn new(state: T, on_close: impl FnOnce(&T) + Send + 'static) -> Scope<T> {
        Scope {
            state,
            on_close: Some(Box::new(on_close)),
        }
    }

    /// The state value this scope was opened with.
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Closes the scope, firing the close notification if it has not fired
    /// yet. Idempotent; dropping the scope has the same effect.
    pub fn close(&mut self) {
        if let Some(on_close) = self.on_close.take() {
            on_close(&self.state);
        }
    }
}

impl<T> Drop for Scope<T> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<T: fmt::Debug> fmt::Debug for Scope<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Scope")
            .field("state", &self.state)
            .field("closed", &self.on_close.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use super::*;

    #[test]
    fn test_close_fires_exactly_once() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let mut scope = Scope::new("req-42", move |state: &&str| {
            assert_eq!(*state, "req-42");
            counter.fetch_add(1, Ordering::SeqCst);
        });

        scope.close();
        scope.close();
        drop(scope);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_closes() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        {
            let _scope = Scope::new(7u32, move |_: &u32| {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
