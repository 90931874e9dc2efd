pub(crate) mod canvas;
pub(crate) mod frame;
pub(crate) mod plan;
pub(crate) mod sheet;
