//! The classic mobile-phone feature diagram, expressed with the boolean
//! constraint kinds.
//!
//! A configuration picks features by pre-assigning their variables on the
//! builder; the search then completes it or proves it impossible.

use crate::error::Result;
use crate::solver::model::ModelBuilder;
use crate::solver::variable::VariableId;

/// Handles to the phone model's feature variables, in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneFeatures {
    pub phone: VariableId,
    pub calls: VariableId,
    pub gps: VariableId,
    pub screen: VariableId,
    pub basic_screen: VariableId,
    pub colour_screen: VariableId,
    pub high_res_screen: VariableId,
    pub media: VariableId,
    pub camera: VariableId,
    pub mp3: VariableId,
}

/// Declares the phone feature diagram on a fresh builder:
///
/// - calls and a screen are mandatory, gps and media optional;
/// - the screen is exactly one of basic, colour, or high resolution;
/// - media means a camera, an mp3 player, or both;
/// - gps does not work with the basic screen;
/// - the camera needs the high resolution screen.
pub fn phone_model() -> Result<(ModelBuilder, PhoneFeatures)> {
    let mut builder = ModelBuilder::new();
    let boolean = builder.create_boolean_domain();

    let features = PhoneFeatures {
        phone: builder.create_variable("phone", &boolean),
        calls: builder.create_variable("calls", &boolean),
        gps: builder.create_variable("gps", &boolean),
        screen: builder.create_variable("screen", &boolean),
        basic_screen: builder.create_variable("basic screen", &boolean),
        colour_screen: builder.create_variable("colour screen", &boolean),
        high_res_screen: builder.create_variable("high resolution screen", &boolean),
        media: builder.create_variable("media", &boolean),
        camera: builder.create_variable("camera", &boolean),
        mp3: builder.create_variable("mp3", &boolean),
    };

    builder.create_mandatory(features.phone, features.calls)?;
    builder.create_optional(features.phone, features.gps)?;
    builder.create_mandatory(features.phone, features.screen)?;
    builder.create_optional(features.phone, features.media)?;
    builder.create_alternative(
        features.screen,
        &[
            features.basic_screen,
            features.colour_screen,
            features.high_res_screen,
        ],
    )?;
    builder.create_or(features.media, &[features.camera, features.mp3])?;
    builder.create_exclude(features.gps, features.basic_screen)?;
    builder.create_required(features.camera, features.high_res_screen)?;

    Ok((builder, features))
}
