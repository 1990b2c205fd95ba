// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod dashboard;
pub mod error;
pub mod login;
pub mod not_found;
pub mod register;
pub mod register_complete;
pub mod start_redirect;
