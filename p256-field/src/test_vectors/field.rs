//! Field arithmetic test vectors.

use hex_literal::hex;

/// Repeated doublings of the x-coordinate of the NIST P-256 basepoint:
/// entry `i` holds the SEC1 encoding of `Gx * 2^i mod p`.
pub const DBL_TEST_VECTORS: &[[u8; 32]] = &[
    hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296"),
    hex!("d62fa3e5c258848ff179cdcac74881e4ee06fb025bd66741e942728bb131852c"),
    hex!("ac5f47cc84b1091ee2f39b958e9103c9dc0df603b7acce83d284e51762630a59"),
    hex!("58be8f9a0962123cc5e7372b1d220793b81bec066f599d07a509ca2ec4c614b3"),
    hex!("b17d1f3412c424798bce6e563a440f277037d80cdeb33a0f4a13945d898c2966"),
    hex!("62fa3e69258848f2179cdcac74881e4ee06fb018bd66741e942728bb131852cd"),
    hex!("c5f47cd24b1091e42f39b958e9103c9dc0df60317acce83d284e51762630a59a"),
    hex!("8be8f9a5962123c75e7372b1d220793b81bec061f599d07a509ca2ec4c614b35"),
    hex!("17d1f34c2c42478dbce6e563a440f277037d80c2eb33a0f4a13945d898c2966b"),
    hex!("2fa3e69858848f1b79cdcac74881e4ee06fb0185d66741e942728bb131852cd6"),
    hex!("5f47cd30b1091e36f39b958e9103c9dc0df6030bacce83d284e51762630a59ac"),
    hex!("be8f9a6162123c6de7372b1d220793b81bec0617599d07a509ca2ec4c614b358"),
    hex!("7d1f34c3c42478dace6e563a440f277037d80c2db33a0f4a13945d898c2966b1"),
    hex!("fa3e69878848f1b59cdcac74881e4ee06fb0185b66741e942728bb131852cd62"),
    hex!("f47cd3101091e36a39b958e9103c9dc0df6030b5cce83d284e51762630a59ac5"),
    hex!("e8f9a6212123c6d37372b1d220793b81bec0616a99d07a509ca2ec4c614b358b"),
    hex!("d1f34c4342478da5e6e563a440f277037d80c2d433a0f4a13945d898c2966b17"),
    hex!("a3e69887848f1b4acdcac74881e4ee06fb0185a76741e942728bb131852cd62f"),
    hex!("47cd3110091e36949b958e9103c9dc0df6030b4dce83d284e51762630a59ac5f"),
    hex!("8f9a6220123c6d29372b1d220793b81bec06169b9d07a509ca2ec4c614b358be"),
    hex!("1f34c4412478da516e563a440f277037d80c2d363a0f4a13945d898c2966b17d"),
    hex!("3e69888248f1b4a2dcac74881e4ee06fb0185a6c741e942728bb131852cd62fa"),
    hex!("7cd3110491e36945b958e9103c9dc0df6030b4d8e83d284e51762630a59ac5f4"),
    hex!("f9a6220923c6d28b72b1d220793b81bec06169b1d07a509ca2ec4c614b358be8"),
    hex!("f34c4413478da515e563a440f277037d80c2d362a0f4a13945d898c2966b17d1"),
    hex!("e69888278f1b4a2acac74881e4ee06fb0185a6c441e942728bb131852cd62fa3"),
    hex!("cd3110501e369454958e9103c9dc0df6030b4d8783d284e51762630a59ac5f47"),
    hex!("9a6220a13c6d28a82b1d220793b81bec06169b0e07a509ca2ec4c614b358be8f"),
    hex!("34c4414378da514f563a440f277037d80c2d361b0f4a13945d898c2966b17d1f"),
    hex!("69888286f1b4a29eac74881e4ee06fb0185a6c361e942728bb131852cd62fa3e"),
    hex!("d311050de369453d58e9103c9dc0df6030b4d86c3d284e51762630a59ac5f47c"),
    hex!("a6220a1cc6d28a79b1d220793b81bec06169b0d77a509ca2ec4c614b358be8f9"),
    hex!("4c44143a8da514f263a440f277037d80c2d361adf4a13945d898c2966b17d1f3"),
    hex!("988828751b4a29e4c74881e4ee06fb0185a6c35be942728bb131852cd62fa3e6"),
    hex!("311050eb369453c88e9103c9dc0df6030b4d86b6d284e51762630a59ac5f47cd"),
    hex!("6220a1d66d28a7911d220793b81bec06169b0d6da509ca2ec4c614b358be8f9a"),
    hex!("c44143acda514f223a440f277037d80c2d361adb4a13945d898c2966b17d1f34"),
    hex!("8882875ab4a29e4374881e4ee06fb0185a6c35b5942728bb131852cd62fa3e69"),
    hex!("11050eb669453c85e9103c9dc0df6030b4d86b6a284e51762630a59ac5f47cd3"),
    hex!("220a1d6cd28a790bd220793b81bec06169b0d6d4509ca2ec4c614b358be8f9a6"),
    hex!("44143ad9a514f217a440f277037d80c2d361ada8a13945d898c2966b17d1f34c"),
    hex!("882875b34a29e42f4881e4ee06fb0185a6c35b5142728bb131852cd62fa3e698"),
    hex!("1050eb679453c85d9103c9dc0df6030b4d86b6a184e51762630a59ac5f47cd31"),
    hex!("20a1d6cf28a790bb220793b81bec06169b0d6d4309ca2ec4c614b358be8f9a62"),
    hex!("4143ad9e514f2176440f277037d80c2d361ada8613945d898c2966b17d1f34c4"),
    hex!("82875b3ca29e42ec881e4ee06fb0185a6c35b50c2728bb131852cd62fa3e6988"),
    hex!("050eb67a453c85d8103c9dc0df6030b4d86b6a174e51762630a59ac5f47cd311"),
    hex!("0a1d6cf48a790bb020793b81bec06169b0d6d42e9ca2ec4c614b358be8f9a622"),
    hex!("143ad9e914f2176040f277037d80c2d361ada85d3945d898c2966b17d1f34c44"),
    hex!("2875b3d229e42ec081e4ee06fb0185a6c35b50ba728bb131852cd62fa3e69888"),
    hex!("50eb67a453c85d8103c9dc0df6030b4d86b6a174e51762630a59ac5f47cd3110"),
    hex!("a1d6cf48a790bb020793b81bec06169b0d6d42e9ca2ec4c614b358be8f9a6220"),
    hex!("43ad9e924f2176030f277037d80c2d361ada85d2945d898c2966b17d1f34c441"),
    hex!("875b3d249e42ec061e4ee06fb0185a6c35b50ba528bb131852cd62fa3e698882"),
    hex!("0eb67a4a3c85d80b3c9dc0df6030b4d86b6a174951762630a59ac5f47cd31105"),
    hex!("1d6cf494790bb016793b81bec06169b0d6d42e92a2ec4c614b358be8f9a6220a"),
    hex!("3ad9e928f217602cf277037d80c2d361ada85d2545d898c2966b17d1f34c4414"),
    hex!("75b3d251e42ec059e4ee06fb0185a6c35b50ba4a8bb131852cd62fa3e6988828"),
    hex!("eb67a4a3c85d80b3c9dc0df6030b4d86b6a174951762630a59ac5f47cd311050"),
    hex!("d6cf494890bb016693b81bec06169b0d6d42e9292ec4c614b358be8f9a6220a1"),
    hex!("ad9e9292217602cc277037d80c2d361ada85d2515d898c2966b17d1f34c44143"),
    hex!("5b3d252542ec05974ee06fb0185a6c35b50ba4a1bb131852cd62fa3e69888287"),
    hex!("b67a4a4a85d80b2e9dc0df6030b4d86b6a174943762630a59ac5f47cd311050e"),
    hex!("6cf494960bb0165c3b81bec06169b0d6d42e9285ec4c614b358be8f9a6220a1d"),
    hex!("d9e9292c17602cb877037d80c2d361ada85d250bd898c2966b17d1f34c44143a"),
    hex!("b3d252592ec0596fee06fb0185a6c35b50ba4a16b131852cd62fa3e698882875"),
    hex!("67a4a4b35d80b2dedc0df6030b4d86b6a174942c62630a59ac5f47cd311050eb"),
    hex!("cf494966bb0165bdb81bec06169b0d6d42e92858c4c614b358be8f9a6220a1d6"),
    hex!("9e9292ce7602cb7a7037d80c2d361ada85d250b0898c2966b17d1f34c44143ad"),
    hex!("3d25259dec0596f3e06fb0185a6c35b50ba4a160131852cd62fa3e698882875b"),
    hex!("7a4a4b3bd80b2de7c0df6030b4d86b6a174942c02630a59ac5f47cd311050eb6"),
    hex!("f4949677b0165bcf81bec06169b0d6d42e9285804c614b358be8f9a6220a1d6c"),
    hex!("e9292cf0602cb79e037d80c2d361ada85d250aff98c2966b17d1f34c44143ad9"),
    hex!("d25259e1c0596f3b06fb0185a6c35b50ba4a15fe31852cd62fa3e698882875b3"),
    hex!("a4a4b3c480b2de750df6030b4d86b6a174942bfb630a59ac5f47cd311050eb67"),
    hex!("4949678a0165bce91bec06169b0d6d42e92857f5c614b358be8f9a6220a1d6cf"),
    hex!("9292cf1402cb79d237d80c2d361ada85d250afeb8c2966b17d1f34c44143ad9e"),
    hex!("25259e290596f3a36fb0185a6c35b50ba4a15fd61852cd62fa3e698882875b3d"),
    hex!("4a4b3c520b2de746df6030b4d86b6a174942bfac30a59ac5f47cd311050eb67a"),
    hex!("949678a4165bce8dbec06169b0d6d42e92857f58614b358be8f9a6220a1d6cf4"),
    hex!("292cf1492cb79d1a7d80c2d361ada85d250afeafc2966b17d1f34c44143ad9e9"),
    hex!("5259e292596f3a34fb0185a6c35b50ba4a15fd5f852cd62fa3e698882875b3d2"),
    hex!("a4b3c524b2de7469f6030b4d86b6a174942bfabf0a59ac5f47cd311050eb67a4"),
    hex!("49678a4a65bce8d2ec06169b0d6d42e92857f57d14b358be8f9a6220a1d6cf49"),
    hex!("92cf1494cb79d1a5d80c2d361ada85d250afeafa2966b17d1f34c44143ad9e92"),
    hex!("259e292a96f3a34ab0185a6c35b50ba4a15fd5f352cd62fa3e698882875b3d25"),
    hex!("4b3c52552de746956030b4d86b6a174942bfabe6a59ac5f47cd311050eb67a4a"),
    hex!("9678a4aa5bce8d2ac06169b0d6d42e92857f57cd4b358be8f9a6220a1d6cf494"),
    hex!("2cf14955b79d1a5480c2d361ada85d250afeaf99966b17d1f34c44143ad9e929"),
    hex!("59e292ab6f3a34a90185a6c35b50ba4a15fd5f332cd62fa3e698882875b3d252"),
    hex!("b3c52556de746952030b4d86b6a174942bfabe6659ac5f47cd311050eb67a4a4"),
    hex!("678a4aaebce8d2a306169b0d6d42e92857f57ccbb358be8f9a6220a1d6cf4949"),
    hex!("cf14955d79d1a5460c2d361ada85d250afeaf99766b17d1f34c44143ad9e9292"),
    hex!("9e292abbf3a34a8b185a6c35b50ba4a15fd5f32dcd62fa3e698882875b3d2525"),
    hex!("3c525578e746951530b4d86b6a174942bfabe65a9ac5f47cd311050eb67a4a4b"),
    hex!("78a4aaf1ce8d2a2a6169b0d6d42e92857f57ccb5358be8f9a6220a1d6cf49496"),
    hex!("f14955e39d1a5454c2d361ada85d250afeaf996a6b17d1f34c44143ad9e9292c"),
    hex!("e292abc83a34a8a885a6c35b50ba4a15fd5f32d3d62fa3e698882875b3d25259"),
    hex!("c5255791746951500b4d86b6a174942bfabe65a6ac5f47cd311050eb67a4a4b3"),
    hex!("8a4aaf23e8d2a29f169b0d6d42e92857f57ccb4c58be8f9a6220a1d6cf494967"),
    hex!("14955e48d1a5453d2d361ada85d250afeaf99697b17d1f34c44143ad9e9292cf"),
    hex!("292abc91a34a8a7a5a6c35b50ba4a15fd5f32d2f62fa3e698882875b3d25259e"),
    hex!("52557923469514f4b4d86b6a174942bfabe65a5ec5f47cd311050eb67a4a4b3c"),
    hex!("a4aaf2468d2a29e969b0d6d42e92857f57ccb4bd8be8f9a6220a1d6cf4949678"),
    hex!("4955e48e1a5453d1d361ada85d250afeaf99697a17d1f34c44143ad9e9292cf1"),
    hex!("92abc91c34a8a7a3a6c35b50ba4a15fd5f32d2f42fa3e698882875b3d25259e2"),
    hex!("2557923969514f464d86b6a174942bfabe65a5e75f47cd311050eb67a4a4b3c5"),
    hex!("4aaf2472d2a29e8c9b0d6d42e92857f57ccb4bcebe8f9a6220a1d6cf4949678a"),
    hex!("955e48e5a5453d19361ada85d250afeaf996979d7d1f34c44143ad9e9292cf14"),
    hex!("2abc91cc4a8a7a316c35b50ba4a15fd5f32d2f39fa3e698882875b3d25259e29"),
    hex!("557923989514f462d86b6a174942bfabe65a5e73f47cd311050eb67a4a4b3c52"),
    hex!("aaf247312a29e8c5b0d6d42e92857f57ccb4bce7e8f9a6220a1d6cf4949678a4"),
    hex!("55e48e635453d18a61ada85d250afeaf996979ced1f34c44143ad9e9292cf149"),
    hex!("abc91cc6a8a7a314c35b50ba4a15fd5f32d2f39da3e698882875b3d25259e292"),
    hex!("5792398e514f462886b6a174942bfabe65a5e73a47cd311050eb67a4a4b3c525"),
    hex!("af24731ca29e8c510d6d42e92857f57ccb4bce748f9a6220a1d6cf4949678a4a"),
    hex!("5e48e63a453d18a11ada85d250afeaf996979ce81f34c44143ad9e9292cf1495"),
    hex!("bc91cc748a7a314235b50ba4a15fd5f32d2f39d03e698882875b3d25259e292a"),
    hex!("792398ea14f462836b6a174942bfabe65a5e739f7cd311050eb67a4a4b3c5255"),
    hex!("f24731d429e8c506d6d42e92857f57ccb4bce73ef9a6220a1d6cf4949678a4aa"),
    hex!("e48e63a953d18a0cada85d250afeaf996979ce7cf34c44143ad9e9292cf14955"),
    hex!("c91cc753a7a314185b50ba4a15fd5f32d2f39cf8e698882875b3d25259e292ab"),
    hex!("92398ea84f46282fb6a174942bfabe65a5e739f0cd311050eb67a4a4b3c52557"),
    hex!("24731d519e8c505e6d42e92857f57ccb4bce73e09a6220a1d6cf4949678a4aaf"),
    hex!("48e63aa33d18a0bcda85d250afeaf996979ce7c134c44143ad9e9292cf14955e"),
    hex!("91cc75467a314179b50ba4a15fd5f32d2f39cf82698882875b3d25259e292abc"),
    hex!("2398ea8df46282f26a174942bfabe65a5e739f03d311050eb67a4a4b3c525579"),
    hex!("4731d51be8c505e4d42e92857f57ccb4bce73e07a6220a1d6cf4949678a4aaf2"),
];
