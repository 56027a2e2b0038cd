use serde::{Deserialize, Serialize};

/// One of the three color channels solved independently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    R,
    G,
    B,
}

impl Channel {
    /// Channels in solve order.
    pub const ALL: [Channel; 3] = [Channel::R, Channel::G, Channel::B];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::R => 0,
            Channel::G => 1,
            Channel::B => 2,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Channel::R => "red",
            Channel::G => "green",
            Channel::B => "blue",
        };
        f.pad(name)
    }
}

/// Top-left corner of the mask inside the target image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
}

impl Placement {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Map a mask-local coordinate into target space.
    #[inline]
    pub fn to_target(&self, mask_x: usize, mask_y: usize) -> (usize, usize) {
        (self.x + mask_x, self.y + mask_y)
    }
}
