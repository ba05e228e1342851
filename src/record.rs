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

//! Log record and event identifiers.

use std::fmt;

use crate::Level;

/// Identifies a class of log events.
///
/// Displays as the event name when one is set, otherwise as the numeric id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct EventId {
    id: i32,
    name: Option<String>,
}

impl EventId {
    /// Creates an event id with the given numeric id and no name.
    pub fn new(id: i32) -> EventId {
        EventId { id, name: None }
    }

    /// Creates an event id with a numeric id and a name.
    pub fn named(id: i32, name: impl Into<String>) -> EventId {
        EventId {
            id,
            name: Some(name.into()),
        }
    }

    /// The numeric id.
    pub fn id(&self) -> i32 {
        self.id
    }

    /// The event name, if one is set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.id),
        }
    }
}

impl From<i32> for EventId {
    fn from(id: i32) -> Self {
        EventId::new(id)
    }
}

/// The payload of one logging call.
///
/// Records are ephemeral: one is assembled per call, handed to the layout,
/// and dropped once the rendered line has been written. Only the rendered
/// text survives.
pub struct Record<'a> {
    /// The severity of the record.
    pub level: Level,
    /// The event id of the record.
    pub event_id: &'a EventId,
    /// The category (logger name) the record was written through.
    pub category: &'a str,
    /// The caller-supplied state value.
    pub state: &'a dyn fmt::Display,
    /// The error attached to the record, if any.
    pub exception: Option<&'a (dyn std::error::Error + 'static)>,
    /// The human-readable message, already produced by the caller's
    /// formatter function.
    pub message: &'a str,
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("event_id", &self.event_id)
            .field("category", &self.category)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
