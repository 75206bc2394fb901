//! The display side of the pipeline
//!
//! A [`SomethingScreen`] owns one [`TextView`]. It launches a
//! [`SomethingTask`], waits for its result on the calling task and, if a
//! [`Something`] came back, writes the name into the view. When nothing comes
//! back the view keeps whatever it showed before.

use std::io::Write;

use crate::errors::Error;
use crate::something::Something;
use crate::task::SomethingTask;

/// A sink for a single line of text.
pub trait TextView {
    fn set_text(&mut self, text: &str);

    /// Last text set on this view, if any.
    fn text(&self) -> Option<&str>;
}

/// [`TextView`] that prints each text as one line to a writer.
pub struct WriterTextView<W: Write> {
    writer: W,
    text: Option<String>,
}

impl<W: Write> WriterTextView<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, text: None }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TextView for WriterTextView<W> {
    fn set_text(&mut self, text: &str) {
        if let Err(e) = writeln!(self.writer, "{}", text).and_then(|_| self.writer.flush()) {
            log::error!("Failed to display text: {}", Error::from(e));
        }
        self.text = Some(text.to_string());
    }

    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

pub struct SomethingScreen<V: TextView> {
    something_text_view: V,
}

impl<V: TextView> SomethingScreen<V> {
    pub fn new(something_text_view: V) -> Self {
        Self { something_text_view }
    }

    pub fn text_view(&self) -> &V {
        &self.something_text_view
    }

    pub fn into_text_view(self) -> V {
        self.something_text_view
    }

    /// Display the name of `something`.
    pub fn update_ui(&mut self, something: &Something) {
        self.something_text_view.set_text(something.name());
    }

    pub fn on_post_execute(&mut self, something: Option<Something>) {
        let Some(something) = something else {
            return;
        };
        self.update_ui(&something);
    }

    /// Execute `task` in the background and apply its result here.
    pub async fn load(&mut self, task: SomethingTask) {
        let something = match task.execute().await {
            Ok(something) => something,
            Err(e) => {
                log::error!("{}", Error::from(e));
                None
            }
        };
        self.on_post_execute(something);
    }
}
