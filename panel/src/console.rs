use std::str::FromStr;

use panel_common::{Command, Input, MemoryView, ParseCommandError, Target, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Ac,
    Light,
}

impl Page {
    pub fn targets(self) -> &'static [Target] {
        match self {
            Self::Ac => &Target::ALL,
            Self::Light => &[Target::Toast, Target::Msg],
        }
    }
}

impl FromStr for Page {
    type Err = ParseCommandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "ac" => Ok(Self::Ac),
            "light" => Ok(Self::Light),
            _ => Err(ParseCommandError::InvalidValue {
                field: "page",
                value: value.to_string(),
            }),
        }
    }
}

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleAction {
    Send(Command),
    SetTimerFromInput,
    TypeMins(String),
    Toast(String),
    Navigate(Page),
    Show,
    Help,
    Quit,
}

impl FromStr for ConsoleAction {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "timer" if rest.is_empty() => Ok(Self::SetTimerFromInput),
            "mins" => Ok(Self::TypeMins(rest.to_string())),
            "toast" => Ok(Self::Toast(rest.to_string())),
            "page" => Ok(Self::Navigate(rest.parse()?)),
            "show" => Ok(Self::Show),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => line.parse().map(Self::Send),
        }
    }
}

pub const HELP: &str = "\
mode <heat|cool>    temp <+n|-n>    up    down    fan <auto|quiet|1-5>
off                 mins <value>    timer [minutes]    cancel
light <on|night|off>                toast <text>
page <ac|light>     show            help    quit";

/// A terminal rendition of the panel page. Region changes are printed as
/// they happen.
#[derive(Debug, Clone)]
pub struct ConsoleView {
    inner: MemoryView,
    page: Page,
}

impl ConsoleView {
    pub fn new(page: Page) -> Self {
        let mut view = Self {
            inner: MemoryView::full(),
            page: Page::Ac,
        };
        view.navigate(page);
        view
    }

    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        self.inner.show_only(page.targets().iter().copied());
        match page {
            Page::Ac => {
                if self.inner.input_value(Input::Mins).is_none() {
                    self.inner.set_input(Input::Mins, "");
                }
            }
            Page::Light => self.inner.remove_input(Input::Mins),
        }
    }

    pub fn type_into(&mut self, input: Input, value: &str) -> bool {
        if self.inner.input_value(input).is_none() {
            return false;
        }
        self.inner.set_input(input, value);
        true
    }

    pub fn snapshot(&self) -> String {
        let mut lines = vec![format!("-- {:?} page --", self.page)];
        lines.extend(
            self.inner
                .regions()
                .map(|(target, text)| format!("{:>5} | {text}", target.id())),
        );
        if let Some(value) = self.inner.input_value(Input::Mins) {
            lines.push(format!("{:>5} > {value}", Input::Mins.id()));
        }
        lines.join("\n")
    }
}

impl View for ConsoleView {
    fn has(&self, target: Target) -> bool {
        self.inner.has(target)
    }

    fn text(&self, target: Target) -> Option<&str> {
        self.inner.text(target)
    }

    fn set_text(&mut self, target: Target, text: &str) {
        if !self.inner.has(target) || self.inner.text(target) == Some(text) {
            return;
        }
        self.inner.set_text(target, text);
        println!("[{}] {text}", target.id());
    }

    fn input_value(&self, input: Input) -> Option<String> {
        self.inner.input_value(input)
    }
}
