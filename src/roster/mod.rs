//! Roster classification and ordering.
//!
//! The team directory is rendered as rank groups in a fixed organizational
//! order, with the general-member group further partitioned into sub-team
//! buckets. This module is the pure core behind both the public team section
//! and the admin roster view: a total ordering over members, a grouping
//! projection over a snapshot list, and the marquee rotation used by the
//! landing page. It performs no I/O and never mutates its input records.

pub mod collate;

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::TeamMember;

/// Organizational rank of a roster member, in display priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rank {
    CommunityPresident,
    TeamCaptain,
    SubteamLead,
    SubteamMentor,
    GeneralMember,
}

/// Number of recognized ranks; unrecognized values take this as priority.
pub const RANK_COUNT: usize = 5;

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::CommunityPresident => "community president",
            Rank::TeamCaptain => "team captain",
            Rank::SubteamLead => "subteam lead",
            Rank::SubteamMentor => "subteam mentor",
            Rank::GeneralMember => "general member",
        }
    }

    /// Parse a stored rank value. Case-insensitive, whitespace-trimmed;
    /// anything unrecognized yields `None` and is handled defensively by the
    /// priority lookup rather than rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        [
            Rank::CommunityPresident,
            Rank::TeamCaptain,
            Rank::SubteamLead,
            Rank::SubteamMentor,
            Rank::GeneralMember,
        ]
        .into_iter()
        .find(|r| collate::eq_folded(s, r.as_str()))
    }

    /// Zero-based display priority.
    pub fn priority(&self) -> usize {
        match self {
            Rank::CommunityPresident => 0,
            Rank::TeamCaptain => 1,
            Rank::SubteamLead => 2,
            Rank::SubteamMentor => 3,
            Rank::GeneralMember => 4,
        }
    }
}

/// Functional sub-team, in display priority order for subteam leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubTeam {
    Sponsorship,
    Mechanical,
    Software,
    Hardware,
    Motor,
}

/// Number of recognized sub-teams; unrecognized values take this as priority.
pub const SUB_TEAM_COUNT: usize = 5;

impl SubTeam {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubTeam::Sponsorship => "sponsorship",
            SubTeam::Mechanical => "mechanical",
            SubTeam::Software => "software",
            SubTeam::Hardware => "hardware",
            SubTeam::Motor => "motor",
        }
    }

    /// Parse a stored sub-team value, same defensive rules as [`Rank::parse`].
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        [
            SubTeam::Sponsorship,
            SubTeam::Mechanical,
            SubTeam::Software,
            SubTeam::Hardware,
            SubTeam::Motor,
        ]
        .into_iter()
        .find(|t| collate::eq_folded(s, t.as_str()))
    }

    /// Zero-based display priority (used only for the subteam-lead branch).
    pub fn priority(&self) -> usize {
        match self {
            SubTeam::Sponsorship => 0,
            SubTeam::Mechanical => 1,
            SubTeam::Software => 2,
            SubTeam::Hardware => 3,
            SubTeam::Motor => 4,
        }
    }
}

/// Priority of a raw rank string; unrecognized values sort last.
pub fn rank_priority(raw: &str) -> usize {
    Rank::parse(raw).map(|r| r.priority()).unwrap_or(RANK_COUNT)
}

/// Priority of a raw sub-team value; unrecognized or missing sorts last.
pub fn sub_team_priority(raw: Option<&str>) -> usize {
    raw.and_then(SubTeam::parse)
        .map(|t| t.priority())
        .unwrap_or(SUB_TEAM_COUNT)
}

/// Total ordering over roster members.
///
/// Rank priority first. Two subteam leads compare by sub-team priority only
/// (no name tiebreak; equal-priority leads keep their input order under a
/// stable sort). Two general members compare by sub-team string, then name.
/// Everything else falls through to the Turkish-collation name comparison.
pub fn compare_members(a: &TeamMember, b: &TeamMember) -> Ordering {
    let pa = rank_priority(&a.rank);
    let pb = rank_priority(&b.rank);
    if pa != pb {
        return pa.cmp(&pb);
    }

    if Rank::parse(&a.rank) == Some(Rank::SubteamLead) {
        return sub_team_priority(a.sub_team.as_deref())
            .cmp(&sub_team_priority(b.sub_team.as_deref()));
    }

    if Rank::parse(&a.rank) == Some(Rank::GeneralMember) {
        let st = collate::compare(
            a.sub_team.as_deref().unwrap_or(""),
            b.sub_team.as_deref().unwrap_or(""),
        );
        if st != Ordering::Equal {
            return st;
        }
    }

    collate::compare(&a.name, &b.name)
}

/// Sort a member snapshot into display order. Stable, so comparator ties
/// keep their input order.
pub fn sort_roster(members: &mut [TeamMember]) {
    members.sort_by(compare_members);
}

/// One sub-team bucket inside the general-member group. `sub_team` is `None`
/// for the synthetic unassigned bucket, which always displays last.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTeamBucket {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_team: Option<String>,
    pub members: Vec<TeamMember>,
}

/// One rank group of the projected roster. Every rank except the
/// general-member group carries a flat member list; the general-member group
/// carries sub-team buckets instead.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankGroup {
    pub rank: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<TeamMember>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sub_groups: Vec<SubTeamBucket>,
}

/// Label of the trailing group that collects unrecognized ranks.
pub const OTHER_GROUP_LABEL: &str = "other";

/// Project a member snapshot into the nested display structure.
///
/// Sorts once, then buckets by rank in priority order. General members are
/// partitioned into named sub-team buckets in Turkish-alphabetical order
/// followed by the unassigned bucket. Members with unrecognized ranks land
/// in a trailing group rather than being dropped. Empty groups and buckets
/// are never emitted.
pub fn group_roster(members: &[TeamMember]) -> Vec<RankGroup> {
    let mut sorted = members.to_vec();
    sort_roster(&mut sorted);

    let mut groups = Vec::new();

    for rank in [
        Rank::CommunityPresident,
        Rank::TeamCaptain,
        Rank::SubteamLead,
        Rank::SubteamMentor,
        Rank::GeneralMember,
    ] {
        let bucket: Vec<TeamMember> = sorted
            .iter()
            .filter(|m| Rank::parse(&m.rank) == Some(rank))
            .cloned()
            .collect();
        if bucket.is_empty() {
            continue;
        }

        if rank == Rank::GeneralMember {
            groups.push(RankGroup {
                rank: rank.as_str().to_string(),
                members: Vec::new(),
                sub_groups: partition_general_members(bucket),
            });
        } else {
            groups.push(RankGroup {
                rank: rank.as_str().to_string(),
                members: bucket,
                sub_groups: Vec::new(),
            });
        }
    }

    let unrecognized: Vec<TeamMember> = sorted
        .iter()
        .filter(|m| Rank::parse(&m.rank).is_none())
        .cloned()
        .collect();
    if !unrecognized.is_empty() {
        groups.push(RankGroup {
            rank: OTHER_GROUP_LABEL.to_string(),
            members: unrecognized,
            sub_groups: Vec::new(),
        });
    }

    groups
}

/// Partition sorted general members into sub-team buckets: named buckets in
/// Turkish-alphabetical key order, then the unassigned bucket.
fn partition_general_members(members: Vec<TeamMember>) -> Vec<SubTeamBucket> {
    let mut named: Vec<SubTeamBucket> = Vec::new();
    let mut unassigned: Vec<TeamMember> = Vec::new();

    for member in members {
        let key = member
            .sub_team
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        match key {
            Some(key) => match named.iter_mut().find(|b| b.sub_team.as_deref() == Some(&*key)) {
                Some(bucket) => bucket.members.push(member),
                None => named.push(SubTeamBucket {
                    sub_team: Some(key),
                    members: vec![member],
                }),
            },
            None => unassigned.push(member),
        }
    }

    named.sort_by(|a, b| {
        collate::compare(
            a.sub_team.as_deref().unwrap_or(""),
            b.sub_team.as_deref().unwrap_or(""),
        )
    });

    if !unassigned.is_empty() {
        named.push(SubTeamBucket {
            sub_team: None,
            members: unassigned,
        });
    }

    named
}

/// Rotate a display list so the element at `len - k` lands at index 0.
/// All elements are preserved; only the start offset changes.
pub fn rotate_for_display<T: Clone>(items: &[T], offset: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if !out.is_empty() {
        let k = offset % out.len();
        out.rotate_right(k);
    }
    out
}

/// Marquee order for the landing page: sorted roster rotated so the
/// highest-priority member sits at the visual center of the strip.
pub fn marquee_order(members: &[TeamMember]) -> Vec<TeamMember> {
    let mut sorted = members.to_vec();
    sort_roster(&mut sorted);
    let mid = sorted.len() / 2;
    rotate_for_display(&sorted, mid)
}
