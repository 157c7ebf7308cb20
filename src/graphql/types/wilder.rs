use async_graphql::*;

use crate::store::{self, SkillFields};

#[derive(SimpleObject, Clone, Debug)]
pub struct Wilder {
    #[graphql(name = "_id")]
    pub id: ID,
    pub name: Option<String>,
    pub city: Option<String>,
    pub skills: Option<Vec<Option<Skill>>>,
}

impl From<store::Wilder> for Wilder {
    fn from(wilder: store::Wilder) -> Self {
        Self {
            id: ID(wilder.id),
            name: wilder.name,
            city: wilder.city,
            skills: Some(
                wilder
                    .skills
                    .into_iter()
                    .map(|skill| Some(Skill::from(skill)))
                    .collect(),
            ),
        }
    }
}

#[derive(SimpleObject, Clone, Debug)]
pub struct Skill {
    #[graphql(name = "_id")]
    pub id: Option<ID>,
    pub title: Option<String>,
    pub votes: Option<i32>,
}

impl From<store::Skill> for Skill {
    fn from(skill: store::Skill) -> Self {
        Self {
            id: skill.id.map(ID),
            title: skill.title,
            votes: skill.votes,
        }
    }
}

#[derive(InputObject, Clone, Debug)]
pub struct SkillInput {
    pub title: Option<String>,
    pub votes: Option<i32>,
}

impl From<SkillInput> for SkillFields {
    fn from(input: SkillInput) -> Self {
        Self {
            title: input.title,
            votes: input.votes,
        }
    }
}
