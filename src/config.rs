use crate::error::ConfigError;
use crate::generators::GeneratorKind;

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub width: usize,
    pub height: usize,
    /// The renderer draws an extra ring of walls; the generated grid never contains it.
    pub has_border: bool,
    pub generator_kind: GeneratorKind,

    pub vertical_crawl_count: u32,
    pub horizontal_crawl_count: u32,

    pub number_of_rooms: u32,
    pub min_room_size: usize,
    pub max_room_size: usize,
    pub room_distance_from_wall: usize,

    /// `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: 30,
            height: 30,
            has_border: true,
            generator_kind: GeneratorKind::Random,
            vertical_crawl_count: 5,
            horizontal_crawl_count: 5,
            number_of_rooms: 0,
            min_room_size: 0,
            max_room_size: 0,
            room_distance_from_wall: 0,
            seed: None,
        }
    }
}

impl GenerationConfig {
    pub fn with_dims(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn generator(mut self, kind: GeneratorKind) -> Self {
        self.generator_kind = kind;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn rooms(mut self, count: u32, min_size: usize, max_size: usize, distance: usize) -> Self {
        self.number_of_rooms = count;
        self.min_room_size = min_size;
        self.max_room_size = max_size;
        self.room_distance_from_wall = distance;
        self
    }

    pub fn crawls(mut self, vertical: u32, horizontal: u32) -> Self {
        self.vertical_crawl_count = vertical;
        self.horizontal_crawl_count = horizontal;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }

        // room settings are inert without rooms
        if self.number_of_rooms == 0 {
            return Ok(());
        }

        if self.max_room_size <= self.min_room_size {
            return Err(ConfigError::RoomSizeRange {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }

        let margin = self.room_distance_from_wall * 2;
        if margin >= self.width || margin >= self.height {
            return Err(ConfigError::RoomMarginTooLarge {
                distance: self.room_distance_from_wall,
                width: self.width,
                height: self.height,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod test_config {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GenerationConfig::default();
        assert_eq!((config.width, config.height), (30, 30));
        assert!(config.has_border);
        assert_eq!(config.generator_kind, GeneratorKind::Random);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_grid() {
        assert_eq!(
            GenerationConfig::with_dims(0, 4).validate(),
            Err(ConfigError::EmptyGrid {
                width: 0,
                height: 4
            })
        );
    }

    #[test]
    fn rejects_inverted_room_sizes() {
        let config = GenerationConfig::with_dims(20, 20).rooms(3, 5, 5, 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::RoomSizeRange { min: 5, max: 5 })
        );
    }

    #[test]
    fn rejects_oversized_margin() {
        let config = GenerationConfig::with_dims(20, 8).rooms(1, 2, 5, 4);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RoomMarginTooLarge { distance: 4, .. })
        ));
    }

    #[test]
    fn room_settings_ignored_without_rooms() {
        let config = GenerationConfig::with_dims(4, 4).rooms(0, 9, 1, 10);
        assert_eq!(config.validate(), Ok(()));
    }
}
