use uuid::Uuid;

use crate::features::pickups::dtos::{CreatePickupDto, PickupResponseDto};

/// Mock pickup scheduling.
///
/// The pickups flow is not wired to real persistence: GET serves a fixed
/// sample list and POST only echoes the submitted payload with a generated
/// id. Nothing submitted here survives the request. The `pickup_requests`
/// table already exists for when this goes live.
pub struct PickupService;

impl PickupService {
    pub fn new() -> Self {
        Self
    }

    /// The static sample list shown in the scheduling screen
    pub fn list(&self) -> Vec<PickupResponseDto> {
        vec![
            PickupResponseDto {
                id: Uuid::from_u128(0x0be2_43f1_9315_4b32_a2cf_2c96_6f01_0001),
                telefone: "+351 912 345 678".to_string(),
                endereco: "Rua das Flores 12, Lisboa".to_string(),
                peso: Some(4.5),
                dia: Some("sábado de manhã".to_string()),
                status: "scheduled".to_string(),
            },
            PickupResponseDto {
                id: Uuid::from_u128(0x0be2_43f1_9315_4b32_a2cf_2c96_6f01_0002),
                telefone: "+351 934 567 890".to_string(),
                endereco: "Avenida da Liberdade 200, Lisboa".to_string(),
                peso: Some(2.0),
                dia: Some("quarta à tarde".to_string()),
                status: "pending".to_string(),
            },
        ]
    }

    /// Echo the submitted payload with a fresh id; nothing is stored
    pub fn create(&self, dto: CreatePickupDto) -> PickupResponseDto {
        PickupResponseDto {
            id: Uuid::new_v4(),
            telefone: dto.telefone,
            endereco: dto.endereco,
            peso: dto.peso,
            dia: dto.dia,
            status: "pending".to_string(),
        }
    }
}

impl Default for PickupService {
    fn default() -> Self {
        Self::new()
    }
}
