mod contribution_dto;

pub use contribution_dto::{
    ContributionResponseDto, CreateContributionDto, MyContributionsQuery, UpdateContributionDto,
};
