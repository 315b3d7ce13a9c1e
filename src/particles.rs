//! Drifting particle field behind the glass card
//!
//! Positions are a pure function of (seed, index, tick), so a frame can be
//! reproduced from state alone.

/// Particles rise by one row every this many ticks (scaled per particle)
const RISE_TICKS: u32 = 12;

const GLYPHS: [char; 4] = ['·', '∙', '°', '*'];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: u16,
    pub y: u16,
    pub glyph: char,
    /// 0.0..1.0, used to dim distant particles
    pub brightness: f32,
}

/// One particle per `density` cells, laid out inside `width` x `height`.
pub fn particle_field(
    seed: u64,
    tick: u32,
    width: u16,
    height: u16,
    density: u32,
) -> Vec<Particle> {
    if width == 0 || height == 0 || density == 0 {
        return Vec::new();
    }
    let count = (width as u32 * height as u32) / density;
    (0..count)
        .map(|i| {
            let h = mix64(seed ^ (i as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15));
            let x = (h % width as u64) as u16;
            let start_y = ((h >> 16) % height as u64) as u32;
            let speed = 1 + ((h >> 32) % 3) as u32;
            let risen = tick / (RISE_TICKS * speed);
            let y = (start_y + height as u32 - risen % height as u32) % height as u32;
            Particle {
                x,
                y: y as u16,
                glyph: GLYPHS[((h >> 40) % GLYPHS.len() as u64) as usize],
                brightness: 1.0 / speed as f32,
            }
        })
        .collect()
}

fn mix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
