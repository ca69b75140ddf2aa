//! Shared fixture for CompatKit integration tests.

use compatkit_engine::{Compat, NodeId, RenderMode, TreeOps};
use compatkit_mock::{MockDom, NodeLayout};

/// Install the test subscriber once; `RUST_LOG` filters as usual.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A small headless page: `body > container > target`, with the container
/// given a real content width so percentage resolution has something to
/// work against.
pub struct Page {
    pub dom: MockDom,
    pub compat: Compat,
    pub container: NodeId,
    pub target: NodeId,
}

impl Page {
    pub fn new(mode: RenderMode) -> Self {
        init_tracing();
        let mut dom = MockDom::new(mode);
        let compat = Compat::new(mode);

        let container = dom.create_element("div");
        let body = dom.body();
        dom.append_child(body, container);
        dom.set_layout(
            container,
            NodeLayout {
                inner_width: 300.0,
                inner_height: 400.0,
                outer_width: 300.0,
                outer_height: 400.0,
                ..NodeLayout::default()
            },
        );

        let target = dom.create_element("div");
        dom.append_child(container, target);

        Self {
            dom,
            compat,
            container,
            target,
        }
    }

    pub fn modern() -> Self {
        Self::new(RenderMode::modern())
    }

    pub fn legacy() -> Self {
        Self::new(RenderMode::legacy(8, false))
    }

    /// Resize the container's content box.
    pub fn resize_container(&mut self, width: f32, height: f32) {
        let layout = self.dom.layout_mut(self.container);
        layout.inner_width = width;
        layout.outer_width = width;
        layout.inner_height = height;
        layout.outer_height = height;
    }
}
