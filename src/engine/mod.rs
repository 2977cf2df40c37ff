//! Visualization pipelines and the session that drives them
//!
//! # Pipelines
//!
//! ```text
//! pointers:   source → declarations + prints → StackLayout + ConsoleOutput
//! recursion:  source → Classification → frames + tree → narrative
//! ```
//!
//! Both are pure functions of the source text ([`visualize_pointers`],
//! [`visualize_recursion`]). [`Session`] holds the only mutable state: the
//! selected topic, the working copy of its source, and the last result.

pub mod topics;

pub use topics::{Topic, TopicKey};

use crate::explain::{explain_or_fallback, ExplainService, Explanation};
use crate::memory::stack::StackLayout;
use crate::parser::{extract_declarations, extract_prints, Declaration, PrintStatement};
use crate::recursion::{
    render_trace, synthesize_frames, synthesize_tree, CallFrame, CallTreeNode, Classification,
};
use crate::terminal::{simulate_output, ConsoleOutput};

/// Result of the pointer pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerVisualization {
    pub declarations: Vec<Declaration>,
    pub prints: Vec<PrintStatement>,
    pub layout: StackLayout,
    pub output: ConsoleOutput,
}

/// Result of the recursion pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecursionVisualization {
    pub classification: Classification,
    pub frames: Vec<CallFrame>,
    pub tree: Option<CallTreeNode>,
    /// `None` for patterns without a narrative template
    pub narrative: Option<String>,
}

/// Render-ready result of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visualization {
    Pointers(PointerVisualization),
    Recursion(RecursionVisualization),
}

impl Visualization {
    pub fn topic(&self) -> TopicKey {
        match self {
            Visualization::Pointers(_) => TopicKey::Pointers,
            Visualization::Recursion(_) => TopicKey::Recursion,
        }
    }
}

pub fn visualize_pointers(source: &str) -> PointerVisualization {
    let declarations = extract_declarations(source);
    let prints = extract_prints(source);
    let layout = StackLayout::build(&declarations);
    let output = simulate_output(&prints, &declarations);

    PointerVisualization {
        declarations,
        prints,
        layout,
        output,
    }
}

pub fn visualize_recursion(source: &str) -> RecursionVisualization {
    let classification = Classification::classify(source);
    let frames = synthesize_frames(classification);
    let tree = synthesize_tree(classification);
    let narrative = render_trace(classification, &frames);

    RecursionVisualization {
        classification,
        frames,
        tree,
        narrative,
    }
}

/// Run the pipeline for `topic`
pub fn visualize(topic: TopicKey, source: &str) -> Visualization {
    match topic {
        TopicKey::Pointers => Visualization::Pointers(visualize_pointers(source)),
        TopicKey::Recursion => Visualization::Recursion(visualize_recursion(source)),
    }
}

/// Selected topic, working source, and last rendered result
#[derive(Debug, Clone)]
pub struct Session {
    topic: TopicKey,
    source: String,
    rendered: Option<Visualization>,
}

impl Session {
    /// Start on `topic` with its default source
    pub fn new(topic: TopicKey) -> Self {
        Session {
            topic,
            source: topics::lookup(topic).default_source.to_string(),
            rendered: None,
        }
    }

    /// Start on `topic` with caller-supplied source
    pub fn with_source(topic: TopicKey, source: String) -> Self {
        Session {
            topic,
            source,
            rendered: None,
        }
    }

    pub fn topic(&self) -> TopicKey {
        self.topic
    }

    pub fn topic_info(&self) -> &'static Topic {
        topics::lookup(self.topic)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Replace the working source. The last result stays visible until the
    /// next [`Session::visualize`].
    pub fn set_source(&mut self, source: String) {
        self.source = source;
    }

    pub fn rendered(&self) -> Option<&Visualization> {
        self.rendered.as_ref()
    }

    /// Switch topics: load its default source and clear the last result
    pub fn load_topic(&mut self, topic: TopicKey) {
        tracing::info!(%topic, "loading topic");
        self.topic = topic;
        self.reset();
    }

    /// Restore the topic's default source and clear the last result
    pub fn reset(&mut self) {
        tracing::info!(topic = %self.topic, "resetting source");
        self.source = topics::lookup(self.topic).default_source.to_string();
        self.rendered = None;
    }

    /// Run the current topic's pipeline over the working source
    pub fn visualize(&mut self) -> &Visualization {
        tracing::debug!(topic = %self.topic, bytes = self.source.len(), "visualizing");
        self.rendered.insert(visualize(self.topic, &self.source))
    }

    /// Explain the working source, falling back to static text on failure
    pub fn explain(&self, service: &dyn ExplainService) -> Explanation {
        explain_or_fallback(service, &self.source, self.topic.as_str())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(TopicKey::default())
    }
}
