use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Digest;

#[derive(Copy, Clone, Debug)]
pub enum Phase { FetchTitle, FetchItems, Transform, Render, Write }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::FetchTitle => "fetch_title",
        Phase::FetchItems => "fetch_items",
        Phase::Transform => "transform",
        Phase::Render => "render",
        Phase::Write => "write",
    }}
    fn span(&self) -> Span { match self {
        Phase::FetchTitle => info_span!("fetch_title"),
        Phase::FetchItems => info_span!("fetch_items"),
        Phase::Transform => info_span!("transform"),
        Phase::Render => info_span!("render"),
        Phase::Write => info_span!("write"),
    }}
}

impl OpMarker for Digest {
    const NAME: &'static str = "digest";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("digest") }
}
