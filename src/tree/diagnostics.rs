//! A lightweight sink for non-fatal conditions encountered during layout:
//! unsupported-feature fallbacks and misbehaving measure callbacks. Kept
//! deliberately simple (a plain struct collected into a `Vec`) rather than
//! wired into a logging façade, since these are data the *caller* consumes
//! after a layout pass, not operational log lines.
use crate::tree::NodeId;
use crate::util::sys::Vec;

/// The category of a recorded [`Diagnostic`]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A measure callback returned a negative, `NaN` or infinite size component, which was clamped to `0.0`
    InvalidMeasureResult,
    /// A style feature outside this engine's supported subset was encountered and ignored
    /// (e.g. a vertical writing mode, or floated content)
    UnsupportedFeature,
}

/// A single non-fatal condition encountered while laying out `node`
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// What kind of condition this is
    pub kind: DiagnosticKind,
    /// The node being laid out when the condition was detected
    pub node_id: NodeId,
    /// A short, human-readable description of what happened
    pub detail: &'static str,
}

/// An append-only collector for [`Diagnostic`]s raised during a layout pass.
#[derive(Default, Debug, Clone)]
pub struct DiagnosticsSink {
    entries: Vec<Diagnostic>,
}

impl DiagnosticsSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Record a diagnostic
    pub fn push(&mut self, kind: DiagnosticKind, node_id: NodeId, detail: &'static str) {
        self.entries.push(Diagnostic { kind, node_id, detail });
    }

    /// Remove and return every diagnostic recorded so far
    pub fn drain(&mut self) -> Vec<Diagnostic> {
        core::mem::take(&mut self.entries)
    }

    /// Returns true if no diagnostics have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Clamp a measure-function result to a valid, finite, non-negative size,
/// recording a diagnostic if clamping was necessary.
pub fn sanitize_measure_result(
    sink: &mut DiagnosticsSink,
    node_id: NodeId,
    size: crate::geometry::Size<f32>,
) -> crate::geometry::Size<f32> {
    let fix = |value: f32| -> f32 {
        if value.is_finite() && value >= 0.0 {
            value
        } else {
            0.0
        }
    };
    let fixed = crate::geometry::Size { width: fix(size.width), height: fix(size.height) };
    if fixed != size {
        sink.push(DiagnosticKind::InvalidMeasureResult, node_id, "measure callback returned a negative, NaN or infinite size; clamped to 0");
    }
    fixed
}
