#![allow(clippy::missing_inline_in_public_items)]

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::math::{BlockArea, BlockRegion, GridCoordinate, Pitch, Roll, Rotation, Yaw};

#[derive(Debug, Deserialize, Serialize)]
struct RotationSer {
    yaw: Yaw,
    pitch: Pitch,
    roll: Roll,
}

#[derive(Debug, Deserialize, Serialize)]
struct BlockRegionSer {
    min: [GridCoordinate; 3],
    max: [GridCoordinate; 3],
}

#[derive(Debug, Deserialize, Serialize)]
struct BlockAreaSer {
    min: [GridCoordinate; 2],
    max: [GridCoordinate; 2],
}

impl Serialize for Rotation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RotationSer {
            yaw: self.yaw(),
            pitch: self.pitch(),
            roll: self.roll(),
        }
        .serialize(serializer)
    }
}

/// Any of the 64 triples is accepted and resolved to its canonical rotation.
impl<'de> Deserialize<'de> for Rotation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let RotationSer { yaw, pitch, roll } = RotationSer::deserialize(deserializer)?;
        Ok(Rotation::from_yaw_pitch_roll(yaw, pitch, roll))
    }
}

impl Serialize for BlockRegion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BlockRegionSer {
            min: self.min().into(),
            max: self.max().into(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BlockRegion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let BlockRegionSer { min, max } = BlockRegionSer::deserialize(deserializer)?;
        Ok(BlockRegion::from_min_max(min, max))
    }
}

impl Serialize for BlockArea {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BlockAreaSer {
            min: self.min().into(),
            max: self.max().into(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BlockArea {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let BlockAreaSer { min, max } = BlockAreaSer::deserialize(deserializer)?;
        Ok(BlockArea::from_min_max(min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Corner, Edge, Side};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn rotation_as_triple() {
        let r = Rotation::from_yaw_pitch_roll(Yaw::Clockwise90, Pitch::None, Roll::None);
        assert_eq!(
            serde_json::to_value(r).unwrap(),
            json!({"yaw": "Clockwise90", "pitch": "None", "roll": "None"})
        );
        for &r in Rotation::all() {
            let value = serde_json::to_value(r).unwrap();
            assert_eq!(serde_json::from_value::<Rotation>(value).unwrap(), r);
        }
    }

    #[test]
    fn rotation_redirects_on_deserialize() {
        let value = json!({"yaw": "Clockwise180", "pitch": "Clockwise180", "roll": "None"});
        let r: Rotation = serde_json::from_value(value).unwrap();
        assert_eq!(
            r,
            Rotation::from_yaw_pitch_roll(Yaw::Clockwise180, Pitch::Clockwise180, Roll::None)
        );
        assert!(Rotation::all().contains(&r));
    }

    #[test]
    fn region_as_min_max() {
        let region = BlockRegion::from_min_max([1, 2, 3], [4, 5, 6]);
        assert_eq!(
            serde_json::to_value(region).unwrap(),
            json!({"min": [1, 2, 3], "max": [4, 5, 6]})
        );
        let inverted: BlockRegion =
            serde_json::from_value(json!({"min": [1, 2, 3], "max": [4, 0, 6]})).unwrap();
        assert_eq!(inverted, BlockRegion::EMPTY);

        let area: BlockArea =
            serde_json::from_value(json!({"min": [-1, -2], "max": [0, 0]})).unwrap();
        assert_eq!(area, BlockArea::from_min_max([-1, -2], [0, 0]));
        assert_eq!(
            serde_json::to_value(BlockArea::EMPTY).unwrap(),
            json!({"min": [0, 0], "max": [-1, -1]})
        );
    }

    #[test]
    fn enums_as_names() {
        assert_eq!(serde_json::to_value(Side::Front).unwrap(), json!("Front"));
        assert_eq!(serde_json::to_value(Edge::LeftTop).unwrap(), json!("LeftTop"));
        assert_eq!(
            serde_json::from_value::<Corner>(json!("TopFrontLeft")).unwrap(),
            Corner::TopFrontLeft
        );
    }
}
