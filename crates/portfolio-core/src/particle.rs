//! The decorative network background: drifting nodes joined by faint lines.
//!
//! A [`ParticleField`] owns its nodes exclusively. Hosts feed it viewport
//! sizes and pointer positions, call [`ParticleField::step`] once per frame
//! and then [`ParticleField::render`] onto any [`Surface`].

use crate::config::FieldConfig;
use crate::surface::Surface;
use glam::Vec2;
use rand::prelude::*;

/// Drawing area in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Area in square pixels; degenerate or non-finite sizes count as zero.
    pub fn area(&self) -> f32 {
        let a = self.width * self.height;
        if a.is_finite() && self.width > 0.0 && self.height > 0.0 {
            a
        } else {
            0.0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0.0
    }

    /// Half-open containment: `[0, width) x [0, height)`.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum PointerState {
    #[default]
    Absent,
    Present(Vec2),
}

impl PointerState {
    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        match *self {
            PointerState::Absent => None,
            PointerState::Present(p) => Some(p),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
    /// Parallax factor in [0, 1); scales speed between 50% and 100%.
    pub depth: f32,
}

impl Node {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, opacity: f32, depth: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            opacity,
            depth,
        }
    }

    #[inline]
    pub fn speed_scale(&self) -> f32 {
        0.5 + 0.5 * self.depth
    }

    fn random(rng: &mut StdRng, viewport: Viewport, config: &FieldConfig) -> Self {
        let (r_min, r_max) = config.radius_range;
        let (o_min, o_max) = config.opacity_range;
        let position = Vec2::new(
            wrap(rng.gen::<f32>() * viewport.width, viewport.width),
            wrap(rng.gen::<f32>() * viewport.height, viewport.height),
        );
        let radius = r_min + rng.gen::<f32>() * (r_max - r_min);
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * config.speed,
            (rng.gen::<f32>() - 0.5) * config.speed,
        );
        let opacity = o_min + rng.gen::<f32>() * (o_max - o_min);
        let depth = rng.gen::<f32>();
        Self::new(position, velocity, radius, opacity, depth)
    }
}

/// A pair of nodes close enough to be joined by a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub distance: f32,
    pub alpha: f32,
}

/// How many nodes a viewport gets: one per `density` square pixels, capped.
pub fn node_count(viewport: Viewport, density: f32, max_nodes: usize) -> usize {
    if density <= 0.0 {
        return 0;
    }
    // float -> usize casts saturate, so huge viewports simply hit the cap
    let by_area = (viewport.area() / density).floor() as usize;
    by_area.min(max_nodes)
}

/// Fold `v` into `[0, extent)`.
#[inline]
pub fn wrap(v: f32, extent: f32) -> f32 {
    if extent.is_nan() || extent <= 0.0 {
        return 0.0;
    }
    let r = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if r >= extent {
        0.0
    } else {
        r
    }
}

pub struct ParticleField {
    config: FieldConfig,
    viewport: Viewport,
    nodes: Vec<Node>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self::from_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: FieldConfig, seed: u64) -> Self {
        Self::from_rng(config, StdRng::seed_from_u64(seed))
    }

    fn from_rng(config: FieldConfig, rng: StdRng) -> Self {
        Self {
            config,
            viewport: Viewport::default(),
            nodes: Vec::new(),
            rng,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Replace the node set wholesale. Positions are wrapped into `viewport`.
    pub fn set_nodes(&mut self, viewport: Viewport, nodes: Vec<Node>) {
        self.viewport = viewport;
        self.nodes = nodes;
        for node in &mut self.nodes {
            node.position.x = wrap(node.position.x, viewport.width);
            node.position.y = wrap(node.position.y, viewport.height);
        }
    }

    pub fn initialize(&mut self, viewport: Viewport) {
        let count = node_count(viewport, self.config.density, self.config.max_nodes);
        self.viewport = viewport;
        self.nodes.clear();
        self.nodes.reserve(count);
        for _ in 0..count {
            let node = Node::random(&mut self.rng, viewport, &self.config);
            self.nodes.push(node);
        }
        log::debug!(
            "[background] {} nodes for {}x{}",
            count,
            viewport.width,
            viewport.height
        );
    }

    /// Rebuild every node for the new size; nothing carries over.
    pub fn resize(&mut self, viewport: Viewport) {
        self.initialize(viewport);
    }

    /// Advance one frame. Pointer repulsion nudges positions only.
    pub fn step(&mut self, pointer: &PointerState) {
        let Viewport { width, height } = self.viewport;
        let reach = self.config.pointer_radius;
        let pull = self.config.pointer_pull;
        let pointer = pointer.position();

        for node in &mut self.nodes {
            if let Some(p) = pointer {
                let delta = p - node.position;
                let dist = delta.length();
                if dist < reach {
                    let force = (reach - dist) / reach * pull;
                    node.position -= delta * force;
                }
            }
            node.position += node.velocity * node.speed_scale();
            node.position.x = wrap(node.position.x, width);
            node.position.y = wrap(node.position.y, height);
        }
    }

    /// Every pair closer than the connection distance, each pair once.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let threshold = self.config.connection_distance;
        let max_alpha = self.config.link_max_alpha;
        self.nodes.iter().enumerate().flat_map(move |(i, a)| {
            self.nodes[i + 1..]
                .iter()
                .enumerate()
                .filter_map(move |(k, b)| {
                    let distance = a.position.distance(b.position);
                    (distance < threshold).then(|| Link {
                        from: i,
                        to: i + 1 + k,
                        distance,
                        alpha: (1.0 - distance / threshold) * max_alpha,
                    })
                })
        })
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.viewport.width, self.viewport.height);
        for node in &self.nodes {
            surface.fill_circle(
                node.position,
                node.radius,
                self.config.node_color(node.opacity),
            );
        }
        for link in self.links() {
            surface.stroke_line(
                self.nodes[link.from].position,
                self.nodes[link.to].position,
                self.config.link_width,
                self.config.link_color(link.alpha),
            );
        }
    }
}
