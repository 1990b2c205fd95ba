/// Points awarded each time a habit is completed
pub const POINTS_PER_COMPLETION: u32 = 10;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct UserLevel {
	pub rank: &'static str,
	pub min_points: u32,
	/// CSS class used to color the rank
	pub color_class: &'static str,
}

/// All levels, ordered by the points required to reach them
pub const USER_LEVELS: [UserLevel; 7] = [
	UserLevel {
		rank: "D",
		min_points: 0,
		color_class: "rank_d",
	},
	UserLevel {
		rank: "C",
		min_points: 100,
		color_class: "rank_c",
	},
	UserLevel {
		rank: "B",
		min_points: 300,
		color_class: "rank_b",
	},
	UserLevel {
		rank: "A",
		min_points: 600,
		color_class: "rank_a",
	},
	UserLevel {
		rank: "S",
		min_points: 1000,
		color_class: "rank_s",
	},
	UserLevel {
		rank: "SS",
		min_points: 2000,
		color_class: "rank_ss",
	},
	UserLevel {
		rank: "SS+",
		min_points: 5000,
		color_class: "rank_ss_plus",
	},
];

/// Gets the highest level reached with the given number of points.
pub fn level_for_points(points: u32) -> &'static UserLevel {
	USER_LEVELS
		.iter()
		.rev()
		.find(|level| points >= level.min_points)
		.unwrap_or(&USER_LEVELS[0])
}

/// Gets the level after the one reached with the given points, if there is one.
pub fn next_level(points: u32) -> Option<&'static UserLevel> {
	USER_LEVELS.iter().find(|level| level.min_points > points)
}
