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

//! The line template layout.

use std::fmt::Write;
use std::sync::Arc;

use jiff::Zoned;
use jiff::fmt::strtime;

use crate::Config;
use crate::Record;

#[cfg(windows)]
const NEWLINE: &str = "\r\n";
#[cfg(not(windows))]
const NEWLINE: &str = "\n";

/// The tokens recognized in a line template.
#[derive(Debug, Clone, Copy)]
enum Token {
    DateTime,
    Level,
    EventId,
    State,
    Exception,
    Scope,
    Category,
    Message,
    NewLine,
}

impl Token {
    const ALL: [Token; 9] = [
        Token::DateTime,
        Token::Level,
        Token::EventId,
        Token::State,
        Token::Exception,
        Token::Scope,
        Token::Category,
        Token::Message,
        Token::NewLine,
    ];

    fn literal(self) -> &'static str {
        match self {
            Token::DateTime => "{DateTime}",
            Token::Level => "{Level}",
            Token::EventId => "{EventId}",
            Token::State => "{State}",
            Token::Exception => "{Exception}",
            Token::Scope => "{Scope}",
            Token::Category => "{Category}",
            Token::Message => "{Message}",
            Token::NewLine => "{NewLine}",
        }
    }
}

/// A layout that renders one log record into a text line by substituting
/// the placeholder tokens of the configured template.
///
/// Substitution is a single pass over the template: each recognized token is
/// replaced exactly once, and substituted values are never rescanned, so a
/// message containing `{Level}` comes out verbatim. Tokens the layout does
/// not recognize are left in place. A placeholder whose include flag is
/// disabled expands to the empty string even when the value is present.
#[derive(Debug, Clone)]
pub struct TemplateLayout {
    config: Arc<Config>,
}

impl TemplateLayout {
    pub fn new(config: Arc<Config>) -> TemplateLayout {
        TemplateLayout { config }
    }

    /// Renders `record` against the configured template, timestamped `now`.
    pub fn format(&self, record: &Record, now: &Zoned) -> String {
        let template = self.config.file_format.as_str();
        let mut out = String::with_capacity(template.len() + 64);
        let mut rest = template;
        while let Some(pos) = rest.find('{') {
            out.push_str(&rest[..pos]);
            rest = &rest[pos..];
            match Token::ALL.into_iter().find(|t| rest.starts_with(t.literal())) {
                Some(token) => {
                    self.expand(token, record, now, &mut out);
                    rest = &rest[token.literal().len()..];
                }
                None => {
                    out.push('{');
                    rest = &rest[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }

    fn expand(&self, token: Token, record: &Record, now: &Zoned, out: &mut String) {
        let config = &*self.config;
        match token {
            Token::DateTime if config.include_date_time => {
                // The format string is validated at load time.
                if let Ok(text) = strtime::format(&config.date_time_format, now) {
                    out.push_str(&text);
                }
            }
            Token::Level if config.include_level => out.push_str(record.level.as_str()),
            Token::EventId if config.include_event_id => {
                let _ = write!(out, "{}", record.event_id);
            }
            Token::State if config.include_state => {
                let _ = write!(out, "{}", record.state);
            }
            Token::Exception if config.include_exception => {
                if let Some(exception) = record.exception {
                    push_exception(out, exception);
                }
            }
            Token::Category if config.include_category => out.push_str(record.category),
            Token::Message => out.push_str(record.message),
            Token::NewLine => out.push_str(NEWLINE),
            // `{Scope}` always expands empty: scope content is emitted as
            // separate records, not inlined. Everything else lands here
            // when its include flag is off.
            _ => {}
        }
    }
}

fn push_exception(out: &mut String, exception: &(dyn std::error::Error + 'static)) {
    let _ = write!(out, "{exception}");
    let mut source = exception.source();
    while let Some(cause) = source {
        let _ = write!(out, ": {cause}");
        source = cause.source();
    }
}
