// Copyright 2026 The kidquiz Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The picture catalogs shipped with the game. Each entry is a picture key
//! and its three letter options; the key's first letter is the answer.

pub type CatalogLiteral = (&'static str, [&'static str; 3]);

pub const ANIMALS: &[CatalogLiteral] = &[
    ("אריה", ["א", "ל", "ק"]),
    ("ארנב", ["א", "ע", "ב"]),
    ("איל", ["א", "ע", "פ"]),
    ("ברווז", ["ב", "ו", "ח"]),
    ("ברדלס", ["ב", "ק", "ד"]),
    ("גמל", ["ג", "ד", "כ"]),
    ("גורילה", ["ג", "ש", "ו"]),
    ("דג", ["ד", "ת", "ר"]),
    ("דוב", ["ד", "מ", "א"]),
    ("היפופוטם", ["ה", "ח", "פ"]),
    ("זברה", ["ז", "צ", "ט"]),
    ("זבוב", ["ז", "ק", "ש"]),
    ("חתול", ["ח", "כ", "פ"]),
    ("חמור", ["ח", "מ", "ש"]),
    ("ינשוף", ["י", "ו", "ת"]),
    ("יען", ["י", "ק", "ג"]),
    ("כלב", ["כ", "ד", "ב"]),
    ("כלב", ["ש", "כ", "ט"]),
    ("כבשה", ["כ", "ז", "ג"]),
    ("נמר", ["נ", "מ", "ס"]),
    ("נחש", ["נ", "ד", "ת"]),
    ("סוס", ["ס", "ו", "ש"]),
    ("פיל", ["פ", "ה", "ר"]),
    ("צב", ["צ", "ב", "ט"]),
    ("קוף", ["ק", "ה", "ח "]),
    ("קנגורו", ["ק", "ש", "ג"]),
    ("תוכי", ["ת", "ש", "ג"]),
    ("נשר", ["נ", "ק", "ג"]),
    ("סנאי", ["ס", "ב", "ר"]),
    ("ג׳ירפה", ["ג", "ח", "צ"]),
    ("חזיר", ["ג", "ח", "ש"]),
    ("פרה", ["ע", "פ", "י"]),
    ("פינגווין", ["ר", "פ", "ק"]),
    ("כריש", ["צ", "נ", "כ"]),
    ("לוויתן", ["ה", "ל", "ס"]),
    ("עכבר", ["צ", "ע", "ח"]),
    ("פרפר", ["ב", "פ", "ז"]),
    ("צפרדע", ["צ", "ב", "א"]),
    ("תרנגול", ["ק", "ל", "ת"]),
];

pub const TRANSPORTATION: &[CatalogLiteral] = &[
    ("אוטובוס", ["א", "ב", "ת"]),
    ("מכונית", ["מ", "ל", "כ"]),
    ("מונית", ["מ", "ס", "ג"]),
    ("כבאית", ["ש", "ד", "כ"]),
    ("אמבולנס", ["ש", "א", "כ"]),
    ("רכבת", ["ר", "ד", "ק"]),
    ("אופניים", ["א", "ע", "ב"]),
    ("מטוס", ["מ", "ט", "נ"]),
    ("אוניה", ["א", "ק", "פ"]),
    ("קורקינט", ["ק", "ר", "ת"]),
    ("משאית", ["מ", "ש", "ת"]),
    ("טרקטור", ["ט", "ר", "ס"]),
    ("אופנוע", ["א", "ו", "ע"]),
    ("מסוק", ["מ", "ב", "ק"]),
    ("רכבל", ["ר", "ש", "ג"]),
    ("גרר", ["ב", "י", "ג"]),
    ("מערבל בטון", ["ב", "מ", "ד"]),
    ("כדור פורח", ["כ", "ש", "ג"]),
    ("צוללת", ["צ", "ש", "ג"]),
    ("קאיאק", ["ה", "ת", "ק"]),
    ("מלגזה", ["ד", "מ", "ת"]),
];

/// The Hebrew alphabet in order, without final forms.
pub const HEBREW_LETTERS: [&str; 22] = [
    "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט", "י", "כ", "ל", "מ", "נ", "ס", "ע", "פ", "צ", "ק",
    "ר", "ש", "ת",
];
