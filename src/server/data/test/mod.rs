mod achievement;
mod challenge;
mod exercise;
mod leaderboard;
mod lesson;
mod progress;
mod quiz_attempt;
mod unit;
mod user;
