use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::dimensions::Unit;
use crate::dimensions::units::Dpi;
use crate::font::{FontDescription, FontKey};
use super::RenderOutput;

/// What identifies a rendered formula: the text, the resolution, the font and the angle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    text : String,
    dpi_bits : u64,
    font : FontKey,
    angle_bits : u64,
}

impl CacheKey {
    /// Key of `text` rendered at `dpi` with `font`, rotated by `angle` degrees
    pub fn new(text : &str, dpi : Unit<Dpi>, font : &FontDescription, angle : f64) -> Self {
        Self {
            text : text.to_string(),
            dpi_bits : dpi.key_bits(),
            font : font.cache_key(),
            angle_bits : Unit::<()>::new(angle).key_bits(),
        }
    }
}

/// Decides how many entries the cache drops after an insertion
pub trait EvictionPolicy {
    /// Number of oldest entries to drop when the cache holds `len` entries
    fn excess(&self, len : usize) -> usize;
}

/// Keeps everything
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unbounded;

impl EvictionPolicy for Unbounded {
    fn excess(&self, _len : usize) -> usize {
        0
    }
}

/// Keeps the newest `n` entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxEntries(pub usize);

impl EvictionPolicy for MaxEntries {
    fn excess(&self, len : usize) -> usize {
        len.saturating_sub(self.0)
    }
}

/// Rendered formulas, oldest first.
pub struct RenderCache<P = Unbounded> {
    entries : HashMap<CacheKey, Rc<RenderOutput>>,
    order : VecDeque<CacheKey>,
    policy : P,
}

impl<P : EvictionPolicy + Default> Default for RenderCache<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

impl<P : EvictionPolicy> RenderCache<P> {
    /// An empty cache
    pub fn new(policy : P) -> Self {
        Self {
            entries : HashMap::new(),
            order : VecDeque::new(),
            policy,
        }
    }

    /// The cached output for `key`
    pub fn get(&self, key : &CacheKey) -> Option<Rc<RenderOutput>> {
        self.entries.get(key).cloned()
    }

    /// Stores `output`, then drops the oldest entries as the policy asks.
    pub fn insert(&mut self, key : CacheKey, output : Rc<RenderOutput>) {
        if self.entries.insert(key.clone(), output).is_none() {
            self.order.push_back(key);
        }

        let excess = self.policy.excess(self.entries.len());
        for _ in 0 .. excess {
            match self.order.pop_front() {
                Some(oldest) => { self.entries.remove(&oldest); },
                None         => break,
            }
        }
    }

    /// Number of cached formulas
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the cache empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}


#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::{CacheKey, EvictionPolicy, MaxEntries, RenderCache, Unbounded};
    use crate::dimensions::Unit;
    use crate::font::{FontDescription, UsedGlyphs};
    use crate::render::{Payload, RenderOutput};

    fn output(width : f64) -> Rc<RenderOutput> {
        Rc::new(RenderOutput {
            width : Unit::new(width),
            height : Unit::new(1.),
            payload : Payload::PostScript(String::new()),
            used_glyphs : UsedGlyphs::new(),
        })
    }

    fn key(text : &str) -> CacheKey {
        CacheKey::new(text, Unit::new(72.), &FontDescription::default(), 0.)
    }

    #[test]
    fn keys() {
        let font = FontDescription::default();
        let dpi = Unit::new(72.);
        assert_eq!(CacheKey::new("x", dpi, &font, 0.), CacheKey::new("x", dpi, &font, -0.));
        assert_ne!(CacheKey::new("x", dpi, &font, 0.), CacheKey::new("x", dpi, &font, 90.));
        assert_ne!(CacheKey::new("x", dpi, &font, 0.), CacheKey::new("x", Unit::new(100.), &font, 0.));
        assert_ne!(CacheKey::new("x", dpi, &font, 0.), CacheKey::new("y", dpi, &font, 0.));
    }

    #[test]
    fn policies() {
        let cases = [
            (0, 0, 0),
            (3, 2, 1),
            (2, 2, 0),
            (1, 2, 0),
        ];
        for (len, max, excess) in cases {
            eprintln!("len {} max {}", len, max);
            assert_eq!(MaxEntries(max).excess(len), excess);
            assert_eq!(Unbounded.excess(len), 0);
        }
    }

    #[test]
    fn shared_entries() {
        let mut cache : RenderCache = RenderCache::default();
        let first = output(1.);
        cache.insert(key("x"), first.clone());
        let hit = cache.get(&key("x")).unwrap();
        assert!(Rc::ptr_eq(&first, &hit));
        assert!(cache.get(&key("y")).is_none());
    }

    #[test]
    fn oldest_first() {
        let mut cache = RenderCache::new(MaxEntries(2));
        cache.insert(key("a"), output(1.));
        cache.insert(key("b"), output(2.));
        cache.insert(key("a"), output(3.));
        assert_eq!(cache.len(), 2);

        cache.insert(key("c"), output(4.));
        assert_eq!(cache.len(), 2);
        assert!(cache.get(&key("a")).is_none());
        assert_eq!(cache.get(&key("b")).unwrap().width, Unit::new(2.));
        assert_eq!(cache.get(&key("c")).unwrap().width, Unit::new(4.));

        cache.clear();
        assert!(cache.is_empty());
    }
}
