use super::metadata::{BlockStructure, VersionRecord};

// Version table
//------------------------------------------------------------------------------

// Indexed by zero-based version. Capacity rows follow ECLevel (L, M, Q, H) and
// columns follow Mode (Numeric, Alphanumeric, Byte, Kanji). Block rows follow
// ECLevel as (group 1 count, group 1 size, group 2 count, group 2 size, ecc per block).
pub(crate) static VERSION_DB: [VersionRecord; 40] = [
    // Version 1
    VersionRecord {
        alignment: &[],
        remainder_bits: 0,
        capacity: [[41, 25, 17, 10], [34, 20, 14, 8], [27, 16, 11, 7], [17, 10, 7, 4]],
        blocks: [
            BlockStructure::new(1, 19, 0, 0, 7),
            BlockStructure::new(1, 16, 0, 0, 10),
            BlockStructure::new(1, 13, 0, 0, 13),
            BlockStructure::new(1, 9, 0, 0, 17),
        ],
    },
    // Version 2
    VersionRecord {
        alignment: &[6, 18],
        remainder_bits: 7,
        capacity: [[77, 47, 32, 20], [63, 38, 26, 16], [48, 29, 20, 12], [34, 20, 14, 8]],
        blocks: [
            BlockStructure::new(1, 34, 0, 0, 10),
            BlockStructure::new(1, 28, 0, 0, 16),
            BlockStructure::new(1, 22, 0, 0, 22),
            BlockStructure::new(1, 16, 0, 0, 28),
        ],
    },
    // Version 3
    VersionRecord {
        alignment: &[6, 22],
        remainder_bits: 7,
        capacity: [[127, 77, 53, 32], [101, 61, 42, 26], [77, 47, 32, 20], [58, 35, 24, 15]],
        blocks: [
            BlockStructure::new(1, 55, 0, 0, 15),
            BlockStructure::new(1, 44, 0, 0, 26),
            BlockStructure::new(2, 17, 0, 0, 18),
            BlockStructure::new(2, 13, 0, 0, 22),
        ],
    },
    // Version 4
    VersionRecord {
        alignment: &[6, 26],
        remainder_bits: 7,
        capacity: [[187, 114, 78, 48], [149, 90, 62, 38], [111, 67, 46, 28], [82, 50, 34, 21]],
        blocks: [
            BlockStructure::new(1, 80, 0, 0, 20),
            BlockStructure::new(2, 32, 0, 0, 18),
            BlockStructure::new(2, 24, 0, 0, 26),
            BlockStructure::new(4, 9, 0, 0, 16),
        ],
    },
    // Version 5
    VersionRecord {
        alignment: &[6, 30],
        remainder_bits: 7,
        capacity: [[255, 154, 106, 65], [202, 122, 84, 52], [144, 87, 60, 37], [106, 64, 44, 27]],
        blocks: [
            BlockStructure::new(1, 108, 0, 0, 26),
            BlockStructure::new(2, 43, 0, 0, 24),
            BlockStructure::new(2, 15, 2, 16, 18),
            BlockStructure::new(2, 11, 2, 12, 22),
        ],
    },
    // Version 6
    VersionRecord {
        alignment: &[6, 34],
        remainder_bits: 7,
        capacity: [[322, 195, 134, 82], [255, 154, 106, 65], [178, 108, 74, 45], [139, 84, 58, 36]],
        blocks: [
            BlockStructure::new(2, 68, 0, 0, 18),
            BlockStructure::new(4, 27, 0, 0, 16),
            BlockStructure::new(4, 19, 0, 0, 24),
            BlockStructure::new(4, 15, 0, 0, 28),
        ],
    },
    // Version 7
    VersionRecord {
        alignment: &[6, 22, 38],
        remainder_bits: 0,
        capacity: [[370, 224, 154, 95], [293, 178, 122, 75], [207, 125, 86, 53], [154, 93, 64, 39]],
        blocks: [
            BlockStructure::new(2, 78, 0, 0, 20),
            BlockStructure::new(4, 31, 0, 0, 18),
            BlockStructure::new(2, 14, 4, 15, 18),
            BlockStructure::new(4, 13, 1, 14, 26),
        ],
    },
    // Version 8
    VersionRecord {
        alignment: &[6, 24, 42],
        remainder_bits: 0,
        capacity: [[461, 279, 192, 118], [365, 221, 152, 93], [259, 157, 108, 66], [202, 122, 84, 52]],
        blocks: [
            BlockStructure::new(2, 97, 0, 0, 24),
            BlockStructure::new(2, 38, 2, 39, 22),
            BlockStructure::new(4, 18, 2, 19, 22),
            BlockStructure::new(4, 14, 2, 15, 26),
        ],
    },
    // Version 9
    VersionRecord {
        alignment: &[6, 26, 46],
        remainder_bits: 0,
        capacity: [[552, 335, 230, 141], [432, 262, 180, 111], [312, 189, 130, 80], [235, 143, 98, 60]],
        blocks: [
            BlockStructure::new(2, 116, 0, 0, 30),
            BlockStructure::new(3, 36, 2, 37, 22),
            BlockStructure::new(4, 16, 4, 17, 20),
            BlockStructure::new(4, 12, 4, 13, 24),
        ],
    },
    // Version 10
    VersionRecord {
        alignment: &[6, 28, 50],
        remainder_bits: 0,
        capacity: [[652, 395, 271, 167], [513, 311, 213, 131], [364, 221, 151, 93], [288, 174, 119, 74]],
        blocks: [
            BlockStructure::new(2, 68, 2, 69, 18),
            BlockStructure::new(4, 43, 1, 44, 26),
            BlockStructure::new(6, 19, 2, 20, 24),
            BlockStructure::new(6, 15, 2, 16, 28),
        ],
    },
    // Version 11
    VersionRecord {
        alignment: &[6, 30, 54],
        remainder_bits: 0,
        capacity: [[772, 468, 321, 198], [604, 366, 251, 155], [427, 259, 177, 109], [331, 200, 137, 85]],
        blocks: [
            BlockStructure::new(4, 81, 0, 0, 20),
            BlockStructure::new(1, 50, 4, 51, 30),
            BlockStructure::new(4, 22, 4, 23, 28),
            BlockStructure::new(3, 12, 8, 13, 24),
        ],
    },
    // Version 12
    VersionRecord {
        alignment: &[6, 32, 58],
        remainder_bits: 0,
        capacity: [[883, 535, 367, 226], [691, 419, 287, 177], [489, 296, 203, 125], [374, 227, 155, 96]],
        blocks: [
            BlockStructure::new(2, 92, 2, 93, 24),
            BlockStructure::new(6, 36, 2, 37, 22),
            BlockStructure::new(4, 20, 6, 21, 26),
            BlockStructure::new(7, 14, 4, 15, 28),
        ],
    },
    // Version 13
    VersionRecord {
        alignment: &[6, 34, 62],
        remainder_bits: 0,
        capacity: [[1022, 619, 425, 262], [796, 483, 331, 204], [580, 352, 241, 149], [427, 259, 177, 109]],
        blocks: [
            BlockStructure::new(4, 107, 0, 0, 26),
            BlockStructure::new(8, 37, 1, 38, 22),
            BlockStructure::new(8, 20, 4, 21, 24),
            BlockStructure::new(12, 11, 4, 12, 22),
        ],
    },
    // Version 14
    VersionRecord {
        alignment: &[6, 26, 46, 66],
        remainder_bits: 3,
        capacity: [[1101, 667, 458, 282], [871, 528, 362, 223], [621, 376, 258, 159], [468, 283, 194, 120]],
        blocks: [
            BlockStructure::new(3, 115, 1, 116, 30),
            BlockStructure::new(4, 40, 5, 41, 24),
            BlockStructure::new(11, 16, 5, 17, 20),
            BlockStructure::new(11, 12, 5, 13, 24),
        ],
    },
    // Version 15
    VersionRecord {
        alignment: &[6, 26, 48, 70],
        remainder_bits: 3,
        capacity: [[1250, 758, 520, 320], [991, 600, 412, 254], [703, 426, 292, 180], [530, 321, 220, 136]],
        blocks: [
            BlockStructure::new(5, 87, 1, 88, 22),
            BlockStructure::new(5, 41, 5, 42, 24),
            BlockStructure::new(5, 24, 7, 25, 30),
            BlockStructure::new(11, 12, 7, 13, 24),
        ],
    },
    // Version 16
    VersionRecord {
        alignment: &[6, 26, 50, 74],
        remainder_bits: 3,
        capacity: [[1408, 854, 586, 361], [1082, 656, 450, 277], [775, 470, 322, 198], [602, 365, 250, 154]],
        blocks: [
            BlockStructure::new(5, 98, 1, 99, 24),
            BlockStructure::new(7, 45, 3, 46, 28),
            BlockStructure::new(15, 19, 2, 20, 24),
            BlockStructure::new(3, 15, 13, 16, 30),
        ],
    },
    // Version 17
    VersionRecord {
        alignment: &[6, 30, 54, 78],
        remainder_bits: 3,
        capacity: [[1548, 938, 644, 397], [1212, 734, 504, 310], [876, 531, 364, 224], [674, 408, 280, 173]],
        blocks: [
            BlockStructure::new(1, 107, 5, 108, 28),
            BlockStructure::new(10, 46, 1, 47, 28),
            BlockStructure::new(1, 22, 15, 23, 28),
            BlockStructure::new(2, 14, 17, 15, 28),
        ],
    },
    // Version 18
    VersionRecord {
        alignment: &[6, 30, 56, 82],
        remainder_bits: 3,
        capacity: [[1725, 1046, 718, 442], [1346, 816, 560, 345], [948, 574, 394, 243], [746, 452, 310, 191]],
        blocks: [
            BlockStructure::new(5, 120, 1, 121, 30),
            BlockStructure::new(9, 43, 4, 44, 26),
            BlockStructure::new(17, 22, 1, 23, 28),
            BlockStructure::new(2, 14, 19, 15, 28),
        ],
    },
    // Version 19
    VersionRecord {
        alignment: &[6, 30, 58, 86],
        remainder_bits: 3,
        capacity: [[1903, 1153, 792, 488], [1500, 909, 624, 384], [1063, 644, 442, 272], [813, 493, 338, 208]],
        blocks: [
            BlockStructure::new(3, 113, 4, 114, 28),
            BlockStructure::new(3, 44, 11, 45, 26),
            BlockStructure::new(17, 21, 4, 22, 26),
            BlockStructure::new(9, 13, 16, 14, 26),
        ],
    },
    // Version 20
    VersionRecord {
        alignment: &[6, 34, 62, 90],
        remainder_bits: 3,
        capacity: [[2061, 1249, 858, 528], [1600, 970, 666, 410], [1159, 702, 482, 297], [919, 557, 382, 235]],
        blocks: [
            BlockStructure::new(3, 107, 5, 108, 28),
            BlockStructure::new(3, 41, 13, 42, 26),
            BlockStructure::new(15, 24, 5, 25, 30),
            BlockStructure::new(15, 15, 10, 16, 28),
        ],
    },
    // Version 21
    VersionRecord {
        alignment: &[6, 28, 50, 72, 94],
        remainder_bits: 4,
        capacity: [[2232, 1352, 929, 572], [1708, 1035, 711, 438], [1224, 742, 509, 314], [969, 587, 403, 248]],
        blocks: [
            BlockStructure::new(4, 116, 4, 117, 28),
            BlockStructure::new(17, 42, 0, 0, 26),
            BlockStructure::new(17, 22, 6, 23, 28),
            BlockStructure::new(19, 16, 6, 17, 30),
        ],
    },
    // Version 22
    VersionRecord {
        alignment: &[6, 26, 50, 74, 98],
        remainder_bits: 4,
        capacity: [[2409, 1460, 1003, 618], [1872, 1134, 779, 480], [1358, 823, 565, 348], [1056, 640, 439, 270]],
        blocks: [
            BlockStructure::new(2, 111, 7, 112, 28),
            BlockStructure::new(17, 46, 0, 0, 28),
            BlockStructure::new(7, 24, 16, 25, 30),
            BlockStructure::new(34, 13, 0, 0, 24),
        ],
    },
    // Version 23
    VersionRecord {
        alignment: &[6, 30, 54, 78, 102],
        remainder_bits: 4,
        capacity: [[2620, 1588, 1091, 672], [2059, 1248, 857, 528], [1468, 890, 611, 376], [1108, 672, 461, 284]],
        blocks: [
            BlockStructure::new(4, 121, 5, 122, 30),
            BlockStructure::new(4, 47, 14, 48, 28),
            BlockStructure::new(11, 24, 14, 25, 30),
            BlockStructure::new(16, 15, 14, 16, 30),
        ],
    },
    // Version 24
    VersionRecord {
        alignment: &[6, 28, 54, 80, 106],
        remainder_bits: 4,
        capacity: [[2812, 1704, 1171, 721], [2188, 1326, 911, 561], [1588, 963, 661, 407], [1228, 744, 511, 315]],
        blocks: [
            BlockStructure::new(6, 117, 4, 118, 30),
            BlockStructure::new(6, 45, 14, 46, 28),
            BlockStructure::new(11, 24, 16, 25, 30),
            BlockStructure::new(30, 16, 2, 17, 30),
        ],
    },
    // Version 25
    VersionRecord {
        alignment: &[6, 32, 58, 84, 110],
        remainder_bits: 4,
        capacity: [[3057, 1853, 1273, 784], [2395, 1451, 997, 614], [1718, 1041, 715, 440], [1286, 779, 535, 330]],
        blocks: [
            BlockStructure::new(8, 106, 4, 107, 26),
            BlockStructure::new(8, 47, 13, 48, 28),
            BlockStructure::new(7, 24, 22, 25, 30),
            BlockStructure::new(22, 15, 13, 16, 30),
        ],
    },
    // Version 26
    VersionRecord {
        alignment: &[6, 30, 58, 86, 114],
        remainder_bits: 4,
        capacity: [[3283, 1990, 1367, 842], [2544, 1542, 1059, 652], [1804, 1094, 751, 462], [1425, 864, 593, 365]],
        blocks: [
            BlockStructure::new(10, 114, 2, 115, 28),
            BlockStructure::new(19, 46, 4, 47, 28),
            BlockStructure::new(28, 22, 6, 23, 28),
            BlockStructure::new(33, 16, 4, 17, 30),
        ],
    },
    // Version 27
    VersionRecord {
        alignment: &[6, 34, 62, 90, 118],
        remainder_bits: 4,
        capacity: [[3517, 2132, 1465, 902], [2701, 1637, 1125, 692], [1933, 1172, 805, 496], [1501, 910, 625, 385]],
        blocks: [
            BlockStructure::new(8, 122, 4, 123, 30),
            BlockStructure::new(22, 45, 3, 46, 28),
            BlockStructure::new(8, 23, 26, 24, 30),
            BlockStructure::new(12, 15, 28, 16, 30),
        ],
    },
    // Version 28
    VersionRecord {
        alignment: &[6, 26, 50, 74, 98, 122],
        remainder_bits: 3,
        capacity: [[3669, 2223, 1528, 940], [2857, 1732, 1190, 732], [2085, 1263, 868, 534], [1581, 958, 658, 405]],
        blocks: [
            BlockStructure::new(3, 117, 10, 118, 30),
            BlockStructure::new(3, 45, 23, 46, 28),
            BlockStructure::new(4, 24, 31, 25, 30),
            BlockStructure::new(11, 15, 31, 16, 30),
        ],
    },
    // Version 29
    VersionRecord {
        alignment: &[6, 30, 54, 78, 102, 126],
        remainder_bits: 3,
        capacity: [[3909, 2369, 1628, 1002], [3035, 1839, 1264, 778], [2181, 1322, 908, 559], [1677, 1016, 698, 430]],
        blocks: [
            BlockStructure::new(7, 116, 7, 117, 30),
            BlockStructure::new(21, 45, 7, 46, 28),
            BlockStructure::new(1, 23, 37, 24, 30),
            BlockStructure::new(19, 15, 26, 16, 30),
        ],
    },
    // Version 30
    VersionRecord {
        alignment: &[6, 26, 52, 78, 104, 130],
        remainder_bits: 3,
        capacity: [[4158, 2520, 1732, 1066], [3289, 1994, 1370, 843], [2358, 1429, 982, 604], [1782, 1080, 742, 457]],
        blocks: [
            BlockStructure::new(5, 115, 10, 116, 30),
            BlockStructure::new(19, 47, 10, 48, 28),
            BlockStructure::new(15, 24, 25, 25, 30),
            BlockStructure::new(23, 15, 25, 16, 30),
        ],
    },
    // Version 31
    VersionRecord {
        alignment: &[6, 30, 56, 82, 108, 134],
        remainder_bits: 3,
        capacity: [[4417, 2677, 1840, 1132], [3486, 2113, 1452, 894], [2473, 1499, 1030, 634], [1897, 1150, 790, 486]],
        blocks: [
            BlockStructure::new(13, 115, 3, 116, 30),
            BlockStructure::new(2, 46, 29, 47, 28),
            BlockStructure::new(42, 24, 1, 25, 30),
            BlockStructure::new(23, 15, 28, 16, 30),
        ],
    },
    // Version 32
    VersionRecord {
        alignment: &[6, 34, 60, 86, 112, 138],
        remainder_bits: 3,
        capacity: [[4686, 2840, 1952, 1201], [3693, 2238, 1538, 947], [2670, 1618, 1112, 684], [2022, 1226, 842, 518]],
        blocks: [
            BlockStructure::new(17, 115, 0, 0, 30),
            BlockStructure::new(10, 46, 23, 47, 28),
            BlockStructure::new(10, 24, 35, 25, 30),
            BlockStructure::new(19, 15, 35, 16, 30),
        ],
    },
    // Version 33
    VersionRecord {
        alignment: &[6, 30, 58, 86, 114, 142],
        remainder_bits: 3,
        capacity: [[4965, 3009, 2068, 1273], [3909, 2369, 1628, 1002], [2805, 1700, 1168, 719], [2157, 1307, 898, 553]],
        blocks: [
            BlockStructure::new(17, 115, 1, 116, 30),
            BlockStructure::new(14, 46, 21, 47, 28),
            BlockStructure::new(29, 24, 19, 25, 30),
            BlockStructure::new(11, 15, 46, 16, 30),
        ],
    },
    // Version 34
    VersionRecord {
        alignment: &[6, 34, 62, 90, 118, 146],
        remainder_bits: 3,
        capacity: [[5253, 3183, 2188, 1347], [4134, 2506, 1722, 1060], [2949, 1787, 1228, 756], [2301, 1394, 958, 590]],
        blocks: [
            BlockStructure::new(13, 115, 6, 116, 30),
            BlockStructure::new(14, 46, 23, 47, 28),
            BlockStructure::new(44, 24, 7, 25, 30),
            BlockStructure::new(59, 16, 1, 17, 30),
        ],
    },
    // Version 35
    VersionRecord {
        alignment: &[6, 30, 54, 78, 102, 126, 150],
        remainder_bits: 0,
        capacity: [[5529, 3351, 2303, 1417], [4343, 2632, 1809, 1113], [3081, 1867, 1283, 790], [2361, 1431, 983, 605]],
        blocks: [
            BlockStructure::new(12, 121, 7, 122, 30),
            BlockStructure::new(12, 47, 26, 48, 28),
            BlockStructure::new(39, 24, 14, 25, 30),
            BlockStructure::new(22, 15, 41, 16, 30),
        ],
    },
    // Version 36
    VersionRecord {
        alignment: &[6, 24, 50, 76, 102, 128, 154],
        remainder_bits: 0,
        capacity: [[5836, 3537, 2431, 1496], [4588, 2780, 1911, 1176], [3244, 1966, 1351, 832], [2524, 1530, 1051, 647]],
        blocks: [
            BlockStructure::new(6, 121, 14, 122, 30),
            BlockStructure::new(6, 47, 34, 48, 28),
            BlockStructure::new(46, 24, 10, 25, 30),
            BlockStructure::new(2, 15, 64, 16, 30),
        ],
    },
    // Version 37
    VersionRecord {
        alignment: &[6, 28, 54, 80, 106, 132, 158],
        remainder_bits: 0,
        capacity: [[6153, 3729, 2563, 1577], [4775, 2894, 1989, 1224], [3417, 2071, 1423, 876], [2625, 1591, 1093, 673]],
        blocks: [
            BlockStructure::new(17, 122, 4, 123, 30),
            BlockStructure::new(29, 46, 14, 47, 28),
            BlockStructure::new(49, 24, 10, 25, 30),
            BlockStructure::new(24, 15, 46, 16, 30),
        ],
    },
    // Version 38
    VersionRecord {
        alignment: &[6, 32, 58, 84, 110, 136, 162],
        remainder_bits: 0,
        capacity: [[6479, 3927, 2699, 1661], [5039, 3054, 2099, 1292], [3599, 2181, 1499, 923], [2735, 1658, 1139, 701]],
        blocks: [
            BlockStructure::new(4, 122, 18, 123, 30),
            BlockStructure::new(13, 46, 32, 47, 28),
            BlockStructure::new(48, 24, 14, 25, 30),
            BlockStructure::new(42, 15, 32, 16, 30),
        ],
    },
    // Version 39
    VersionRecord {
        alignment: &[6, 26, 54, 82, 110, 138, 166],
        remainder_bits: 0,
        capacity: [[6743, 4087, 2809, 1729], [5313, 3220, 2213, 1362], [3791, 2298, 1579, 972], [2927, 1774, 1219, 750]],
        blocks: [
            BlockStructure::new(20, 117, 4, 118, 30),
            BlockStructure::new(40, 47, 7, 48, 28),
            BlockStructure::new(43, 24, 22, 25, 30),
            BlockStructure::new(10, 15, 67, 16, 30),
        ],
    },
    // Version 40
    VersionRecord {
        alignment: &[6, 30, 58, 86, 114, 142, 170],
        remainder_bits: 0,
        capacity: [[7089, 4296, 2953, 1817], [5596, 3391, 2331, 1435], [3993, 2420, 1663, 1024], [3057, 1852, 1273, 784]],
        blocks: [
            BlockStructure::new(19, 118, 6, 119, 30),
            BlockStructure::new(18, 47, 31, 48, 28),
            BlockStructure::new(34, 24, 34, 25, 30),
            BlockStructure::new(20, 15, 61, 16, 30),
        ],
    },
];
