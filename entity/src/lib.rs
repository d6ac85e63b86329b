pub mod person;
pub mod team;

/*
 A person can exist on their own; team membership is optional. The reserved
 "Single" team (id 1) is seeded by the migrations as the conventional home
 for people without one, but person.team_id itself stays nullable and is
 cleared (not cascaded) when a team goes away.
 */
